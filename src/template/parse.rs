use serde::Serialize;

/// A named list of selectable options, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionList {
    pub name: String,
    pub options: Vec<String>,
}

/// Result of scanning a template source: its option lists and the renderable body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTemplate {
    /// Lists in order of first declaration.
    pub lists: Vec<OptionList>,
    pub body: String,
}

impl ParsedTemplate {
    /// Look up a list by name.
    pub fn list(&self, name: &str) -> Option<&OptionList> {
        self.lists.iter().find(|list| list.name == name)
    }
}

/// Line-scanning state: which list, if any, option lines currently feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    NoActiveList,
    ActiveList(usize),
}

/// Split a template source into named option lists and its body.
///
/// A trimmed line with no `|`, no `[` and no leading `<` names a new list.
/// Re-declaring a name clears its options but keeps its original position.
/// While a list is active, other non-HTML lines without `[` are split on `|`
/// and every trimmed piece is appended, empty pieces and duplicates included.
/// Blank lines, HTML lines and lines containing `[` are skipped.
///
/// The body is the first trimmed line only, or the whole source when that
/// line is empty. Never fails: malformed input just yields fewer lists.
pub fn parse_lists(source: &str) -> ParsedTemplate {
    let lines: Vec<&str> = source.split('\n').map(str::trim).collect();

    let mut lists: Vec<OptionList> = Vec::new();
    let mut cursor = Cursor::NoActiveList;

    for line in &lines {
        if starts_list(line) {
            cursor = Cursor::ActiveList(declare(&mut lists, line));
        } else if let Cursor::ActiveList(index) = cursor {
            if is_option_line(line) {
                lists[index]
                    .options
                    .extend(line.split('|').map(|piece| piece.trim().to_string()));
            }
        }
    }

    let body = match lines.first() {
        Some(first) if !first.is_empty() => (*first).to_string(),
        _ => source.to_string(),
    };

    ParsedTemplate { lists, body }
}

fn starts_list(line: &str) -> bool {
    !line.is_empty() && !line.contains('|') && !line.starts_with('<') && !line.contains('[')
}

fn is_option_line(line: &str) -> bool {
    !line.is_empty() && !line.starts_with('<') && !line.contains('[')
}

/// Start (or restart) the list called `name`, returning its index.
fn declare(lists: &mut Vec<OptionList>, name: &str) -> usize {
    if let Some(index) = lists.iter().position(|list| list.name == name) {
        lists[index].options.clear();
        return index;
    }
    lists.push(OptionList {
        name: name.to_string(),
        options: Vec::new(),
    });
    lists.len() - 1
}
