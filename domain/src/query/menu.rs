//! Menu options value object

use crate::core::error::DomainError;

/// One selectable entry of a menu
#[derive(Debug, Clone, PartialEq, Eq)]
struct MenuOption {
    /// What the user types to pick this entry
    key: String,
    /// Human-readable description shown in the prompt
    label: String,
}

/// Ordered set of menu options (Value Object)
///
/// Options keep the order they were given in, so the rendered prompt is
/// always the same for the same configuration. Keys are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOptions {
    options: Vec<MenuOption>,
}

impl MenuOptions {
    /// Build a menu from `(key, label)` pairs
    pub fn new<K, L, I>(pairs: I) -> Result<Self, DomainError>
    where
        K: Into<String>,
        L: Into<String>,
        I: IntoIterator<Item = (K, L)>,
    {
        let mut options: Vec<MenuOption> = Vec::new();
        for (key, label) in pairs {
            let key = key.into();
            if options.iter().any(|o| o.key == key) {
                return Err(DomainError::DuplicateMenuKey(key));
            }
            options.push(MenuOption {
                key,
                label: label.into(),
            });
        }
        if options.is_empty() {
            return Err(DomainError::EmptyMenu);
        }
        Ok(Self { options })
    }

    /// The `y`/`n` menu used to confirm overwriting a file
    pub fn yes_no() -> Self {
        Self {
            options: vec![
                MenuOption {
                    key: "y".to_string(),
                    label: "Yes".to_string(),
                },
                MenuOption {
                    key: "n".to_string(),
                    label: "No".to_string(),
                },
            ],
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.options.iter().any(|o| o.key == key)
    }

    /// Look up the label for a key
    pub fn label(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.label.as_str())
    }

    /// Render the options as `(k1)label1, (k2)label2`
    pub fn render(&self) -> String {
        self.options
            .iter()
            .map(|o| format!("({}){}", o.key, o.label))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
