/// One `from -> to:chars` rule; each listed character maps `from` to `to`.
#[derive(Debug, Clone)]
pub struct TransitionRule {
    pub from: String,
    pub to: String,
    pub characters: String,
}

/// One `state -> LABEL` rule. The 1-based specification line is kept so an
/// unresolvable label can be reported with a location.
#[derive(Debug, Clone)]
pub struct AcceptingRule {
    pub state: String,
    pub label: String,
    pub line: u32,
}

/// In-memory parse of a DFA specification. Reading the file that produces
/// the text is the caller's concern.
#[derive(Debug, Clone, Default)]
pub struct DfaSpec {
    pub start_state: String,
    pub states: Vec<String>,
    pub transitions: Vec<TransitionRule>,
    pub accepting: Vec<AcceptingRule>,
    pub keywords: Vec<String>,
    pub boolean_literals: Vec<String>,
}

/// Parses the line-oriented specification format. `#`-prefixed and blank
/// lines are ignored, declaration order is free, and malformed lines are
/// skipped without reporting.
pub fn parse_spec(text: &str) -> DfaSpec {
    let mut spec = DfaSpec::default();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("START_STATE:") {
            spec.start_state = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("STATES:") {
            spec.states = split_list(rest);
        } else if line.starts_with("ACCEPTING_STATES:") {
            // section header, the rules themselves are arrow lines
            continue;
        } else if line.contains("->") {
            parse_arrow_rule(line, index as u32 + 1, &mut spec);
        } else if let Some(rest) = line.strip_prefix("KEYWORDS:") {
            spec.keywords = split_list(rest);
        } else if let Some(rest) = line.strip_prefix("BOOLEAN_LITERALS:") {
            spec.boolean_literals = split_list(rest);
        }
    }

    spec
}

/// An arrow line is either a transition (`from -> to:chars`) or an
/// accepting-state declaration (`state -> LABEL`), told apart by the colon.
fn parse_arrow_rule(line: &str, line_number: u32, spec: &mut DfaSpec) {
    let mut parts = line.splitn(2, "->");
    let state = match parts.next() {
        Some(state) => state.trim(),
        None => return,
    };
    let value = match parts.next() {
        Some(value) => value.trim(),
        None => return,
    };

    if let Some((to, characters)) = value.split_once(':') {
        spec.transitions.push(TransitionRule {
            from: state.to_string(),
            to: to.trim().to_string(),
            characters: characters.trim().to_string(),
        });
    } else {
        spec.accepting.push(AcceptingRule {
            state: state.to_string(),
            label: value.to_string(),
            line: line_number,
        });
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
