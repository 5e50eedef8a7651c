use crate::error::EditorError;
use std::str::FromStr;

/// How a command's argument is written into the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    None,
    /// Inserted verbatim, e.g. a variable holding a DOM element.
    Raw,
    /// Quoted and escaped as a string literal.
    Quoted,
}

/// Runtime methods of an initialized editor instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorCommand {
    CheckDirty,
    Destroy,
    Focus,
    GetData,
    GetSelection,
    GetSnapshot,
    InsertElement,
    InsertHtml,
    InsertText,
    SetData,
}

impl EditorCommand {
    pub const ALL: [EditorCommand; 10] = [
        EditorCommand::CheckDirty,
        EditorCommand::Destroy,
        EditorCommand::Focus,
        EditorCommand::GetData,
        EditorCommand::GetSelection,
        EditorCommand::GetSnapshot,
        EditorCommand::InsertElement,
        EditorCommand::InsertHtml,
        EditorCommand::InsertText,
        EditorCommand::SetData,
    ];

    /// Method name on the client editor object.
    pub fn method(self) -> &'static str {
        match self {
            EditorCommand::CheckDirty => "checkDirty",
            EditorCommand::Destroy => "destroy",
            EditorCommand::Focus => "focus",
            EditorCommand::GetData => "getData",
            EditorCommand::GetSelection => "getSelection",
            EditorCommand::GetSnapshot => "getSnapshot",
            EditorCommand::InsertElement => "insertElement",
            EditorCommand::InsertHtml => "insertHtml",
            EditorCommand::InsertText => "insertText",
            EditorCommand::SetData => "setData",
        }
    }

    /// Snake case spelling accepted by [`FromStr`].
    pub fn snake_name(self) -> &'static str {
        match self {
            EditorCommand::CheckDirty => "check_dirty",
            EditorCommand::Destroy => "destroy",
            EditorCommand::Focus => "focus",
            EditorCommand::GetData => "get_data",
            EditorCommand::GetSelection => "get_selection",
            EditorCommand::GetSnapshot => "get_snapshot",
            EditorCommand::InsertElement => "insert_element",
            EditorCommand::InsertHtml => "insert_html",
            EditorCommand::InsertText => "insert_text",
            EditorCommand::SetData => "set_data",
        }
    }

    pub fn argument(self) -> Argument {
        match self {
            EditorCommand::InsertElement => Argument::Raw,
            EditorCommand::InsertHtml | EditorCommand::InsertText | EditorCommand::SetData => {
                Argument::Quoted
            }
            _ => Argument::None,
        }
    }
}

impl FromStr for EditorCommand {
    type Err = EditorError;

    /// Accepts the client method name (`setData`) or its snake case form
    /// (`set_data`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.method() == s || command.snake_name() == s)
            .ok_or_else(|| EditorError::UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_client_and_snake_case_names() {
        assert_eq!("setData".parse::<EditorCommand>().unwrap(), EditorCommand::SetData);
        assert_eq!(
            "check_dirty".parse::<EditorCommand>().unwrap(),
            EditorCommand::CheckDirty
        );
        assert!(matches!(
            "explode".parse::<EditorCommand>(),
            Err(EditorError::UnknownCommand(name)) if name == "explode"
        ));
    }

    #[test]
    fn rejects_other_spellings() {
        for name in ["SETDATA", "setdata", "_set__data_", "s_e_t_data", "Set_Data"] {
            assert!(
                matches!(name.parse::<EditorCommand>(), Err(EditorError::UnknownCommand(_))),
                "{} should not resolve",
                name
            );
        }
    }

    #[test]
    fn every_command_resolves_from_both_spellings() {
        for command in EditorCommand::ALL {
            assert_eq!(command.method().parse::<EditorCommand>().unwrap(), command);
            assert_eq!(command.snake_name().parse::<EditorCommand>().unwrap(), command);
        }
    }

    #[test]
    fn only_insert_element_takes_a_raw_argument() {
        let raw: Vec<_> = EditorCommand::ALL
            .into_iter()
            .filter(|command| command.argument() == Argument::Raw)
            .collect();
        assert_eq!(raw, vec![EditorCommand::InsertElement]);
    }
}
