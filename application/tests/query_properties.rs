use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use user_query_application::{
    FloatQuery, IntegerQuery, MenuQuery, QueryExecutor, QuerySpec, ScriptedResponseSource,
    TextQuery,
};
use user_query_domain::{Conversion, MenuOptions, TextLimit};

fn ordered_bounds() -> impl Strategy<Value = (Option<i64>, Option<i64>)> {
    (
        proptest::option::of(-1000i64..1000),
        proptest::option::of(-1000i64..1000),
    )
        .prop_map(|bounds| match bounds {
            (Some(a), Some(b)) => (Some(a.min(b)), Some(a.max(b))),
            other => other,
        })
}

fn integer_answer() -> impl Strategy<Value = String> {
    prop_oneof![
        (-2000i64..2000).prop_map(|n| n.to_string()),
        any::<i64>().prop_map(|n| n.to_string()),
        "[a-z .+-]{0,6}",
    ]
}

fn in_range(value: i64, min: Option<i64>, max: Option<i64>) -> bool {
    min.is_none_or(|m| value >= m) && max.is_none_or(|m| value <= m)
}

proptest! {
    #[test]
    fn test_menu_answer_is_always_a_configured_key(
        keys in btree_set("[a-z]{1,3}", 1..5),
        script in vec("[a-zA-Z]{0,4}", 0..8),
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let options = MenuOptions::new(keys.iter().map(|k| (k.clone(), k.to_uppercase()))).unwrap();
        let query = MenuQuery::new("Pick one", options);
        let source = ScriptedResponseSource::new(script.iter().cloned().chain([keys[0].clone()]));

        let answer = QueryExecutor::new().execute(&query, &source).unwrap();

        prop_assert!(query.options().contains(&answer));
        let first_valid = script.iter().position(|raw| keys.contains(raw));
        prop_assert_eq!(source.error_messages().len(), first_valid.unwrap_or(script.len()));
    }

    #[test]
    fn test_integer_answer_is_never_out_of_range(
        (min, max) in ordered_bounds(),
        script in vec(integer_answer(), 0..8),
    ) {
        let query = IntegerQuery::new("", min, max).unwrap();
        let fallback = min.or(max).unwrap_or(0);
        let source = ScriptedResponseSource::new(script.iter().cloned().chain([fallback.to_string()]));

        let answer = QueryExecutor::new().execute(&query, &source).unwrap();

        prop_assert!(in_range(answer, min, max));
        let first_valid = script
            .iter()
            .position(|raw| raw.trim().parse::<i64>().is_ok_and(|n| in_range(n, min, max)));
        prop_assert_eq!(source.error_messages().len(), first_valid.unwrap_or(script.len()));
    }

    #[test]
    fn test_text_answer_is_never_longer_than_limit(
        max in proptest::option::of(0usize..10),
        script in vec(".{0,15}", 0..8),
    ) {
        let query = TextQuery::new("", TextLimit::new(max));
        let source = ScriptedResponseSource::new(script.iter().cloned().chain([String::new()]));

        let answer = QueryExecutor::new().execute(&query, &source).unwrap();

        prop_assert!(max.is_none_or(|m| answer.chars().count() <= m));
        let fits = |raw: &String| max.is_none_or(|m| raw.chars().count() <= m);
        let first_valid = script.iter().position(fits);
        prop_assert_eq!(source.error_messages().len(), first_valid.unwrap_or(script.len()));
    }

    #[test]
    fn test_float_conversion_round_trips_display_form(
        value in any::<f64>().prop_filter("NaN is never a number", |v| !v.is_nan()),
    ) {
        let query = FloatQuery::new("", None, None).unwrap();
        prop_assert_eq!(query.process_raw_response(&value.to_string()), Conversion::Converted(value));
    }

    #[test]
    fn test_float_answer_is_never_out_of_range(
        a in -1.0e6f64..1.0e6,
        b in -1.0e6f64..1.0e6,
        script in vec(any::<f64>().prop_map(|v| v.to_string()), 0..8),
    ) {
        let (min, max) = (a.min(b), a.max(b));
        let query = FloatQuery::new("", Some(min), Some(max)).unwrap();
        let source = ScriptedResponseSource::new(script.iter().cloned().chain([min.to_string()]));

        let answer = QueryExecutor::new().execute(&query, &source).unwrap();

        prop_assert!(answer >= min && answer <= max);
    }
}
