//! Render the editor initialization call for a settings file.

use ckeditor_bind::{CkEditorBehavior, Component, EditorSettings, ToJs};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ckrender", about = "Render CKEditor init statements", version)]
struct Cli {
    /// JSON settings file (can also be set via EDITOR_SETTINGS env var)
    #[arg(short, long, env = "EDITOR_SETTINGS")]
    settings: Option<PathBuf>,

    /// Id of the textarea to bind
    #[arg(long, default_value = "editor")]
    id: String,

    /// Print only the options object literal
    #[arg(long)]
    options_only: bool,

    /// Run an editor command instead of the init call (e.g. setData)
    #[arg(long, conflicts_with = "options_only")]
    command: Option<String>,

    /// Argument for --command
    #[arg(long, requires = "command")]
    arg: Option<String>,
}

struct Textarea<'a>(&'a str);

impl Component for Textarea<'_> {
    fn tag_name(&self) -> &str {
        "textarea"
    }

    fn markup_id(&self) -> &str {
        self.0
    }
}

fn render(cli: &Cli) -> anyhow::Result<String> {
    let settings = match &cli.settings {
        Some(path) => EditorSettings::from_path(path)
            .map_err(|err| anyhow::anyhow!("{}: {}", path.display(), err))?,
        None => EditorSettings::default(),
    };

    let mut behavior = CkEditorBehavior::new();
    settings.apply(&mut behavior)?;

    if cli.options_only {
        return Ok(behavior.options().to_js());
    }

    behavior.bind(&Textarea(&cli.id))?;
    let statement = match &cli.command {
        Some(name) => behavior.command_by_name(name, cli.arg.as_deref())?,
        None => behavior.statement()?,
    };
    Ok(statement.render())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    println!("{}", render(&cli)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ckrender").chain(args.iter().copied()))
            .expect("arguments")
    }

    #[test]
    fn renders_empty_init_without_settings() {
        assert_eq!(
            render(&cli(&["--id", "body"])).expect("render"),
            "$('#body').ckeditor({});"
        );
    }

    #[test]
    fn renders_options_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"toolbar_location": "bottom"}}"#).expect("write");
        let path = file.path().to_string_lossy().to_string();
        assert_eq!(
            render(&cli(&["--settings", &path, "--options-only"])).expect("render"),
            "{toolbarLocation: 'bottom'}"
        );
    }

    #[test]
    fn renders_commands() {
        assert_eq!(
            render(&cli(&["--command", "insertText", "--arg", "hi"])).expect("render"),
            "$('#editor').ckeditorGet().insertText('hi');"
        );
        assert!(render(&cli(&["--command", "launch"])).is_err());
    }

    #[test]
    fn arg_requires_command() {
        assert!(Cli::try_parse_from(["ckrender", "--arg", "x"]).is_err());
    }
}
