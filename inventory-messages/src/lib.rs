//! inventory-messages
//!
//! Centralized message templates for the inventory scanner tooling.
//! Templates use `{variable}` syntax for runtime values, which are
//! substituted with [`msg_format!`].

pub mod messages;

pub use messages::{InstallerMessages, Messages, INSTALLER_MESSAGES, MESSAGES};

/// Substitute `{key}` placeholders in a message template.
///
/// ```
/// use inventory_messages::{msg_format, MESSAGES};
///
/// let line = msg_format!(MESSAGES.installer.path_not_configured, path = "/home/u/.local/bin");
/// assert!(line.contains("/home/u/.local/bin"));
/// ```
#[macro_export]
macro_rules! msg_format {
    ($template:expr) => {
        $template.to_string()
    };
    ($template:expr, $($key:ident = $value:expr),+ $(,)?) => {
        {
            let mut result = $template.to_string();
            $(
                result = result.replace(&format!("{{{}}}", stringify!($key)), &$value.to_string());
            )+
            result
        }
    };
}
