use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Platform default editor: $EDITOR, $VISUAL, then notepad/nano.
    pub fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open `path` in `editor` (or the default one), falling back to the
    /// default editor when the requested one fails.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = Self::default_editor();
        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            _ => {
                error(format!(
                    "Failed to edit configuration file using fallback '{}'",
                    default_editor
                ));
                Err(AppError::Config(format!("no usable editor ({})", default_editor)))
            }
        }
    }
}
