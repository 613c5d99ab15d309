use std::fmt::Display;

use indexmap::IndexMap;

/// One declared identifier. The type is the token-kind label of the value
/// it was declared with; the value is the raw literal text.
#[derive(Debug, Clone)]
pub struct SymbolEntry {
    pub name: String,
    pub ty: String,
    pub value: String,
    pub constant: bool,
}

impl Display for SymbolEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | Type: {} | Value: {} | Constant: {}",
            self.name, self.ty, self.value, self.constant
        )
    }
}

/// A stack of insertion-ordered scope frames. The frame at the bottom is
/// the permanent global scope; one active frame is pushed at construction.
/// Lookup searches innermost-first.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<IndexMap<String, SymbolEntry>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![IndexMap::new(), IndexMap::new()],
        }
    }

    // the stack is never empty: exit_scope refuses to pop the global frame
    fn active_frame_mut(&mut self) -> &mut IndexMap<String, SymbolEntry> {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    /// Inserts into the active frame. Fails only when the name already
    /// exists in that frame; shadowing an outer frame is allowed. The
    /// caller decides whether a failure is worth reporting.
    pub fn add(&mut self, name: &str, ty: &str, value: &str, constant: bool) -> bool {
        let frame = self.active_frame_mut();
        if frame.contains_key(name) {
            return false;
        }

        frame.insert(
            name.to_string(),
            SymbolEntry {
                name: name.to_string(),
                ty: ty.to_string(),
                value: value.to_string(),
                constant,
            },
        );
        true
    }

    /// Searches from the innermost active frame out to the global frame.
    /// Absence is a valid outcome that callers read as "undeclared".
    pub fn lookup(&self, name: &str) -> Option<&SymbolEntry> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Replaces the value of the entry `lookup` would find. Fails when the
    /// name is absent or the entry is constant; a failed update leaves the
    /// entry untouched.
    pub fn update(&mut self, name: &str, new_value: &str) -> bool {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(entry) = scope.get_mut(name) {
                if entry.constant {
                    return false;
                }
                entry.value = new_value.to_string();
                return true;
            }
        }
        false
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(IndexMap::new());
    }

    /// Pops the innermost frame. The global frame is never popped; the
    /// refusal is returned to the caller instead of corrupting the stack.
    pub fn exit_scope(&mut self) -> bool {
        if self.scopes.len() <= 1 {
            return false;
        }
        self.scopes.pop();
        true
    }

    pub fn render_table(&self) -> String {
        let mut out = String::from("===== Symbol Table =====\n");
        for entry in self.scopes[0].values() {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        for (level, scope) in self.scopes.iter().enumerate().skip(1).rev() {
            out.push_str(&format!("---- Scope Level {} ----\n", level));
            for entry in scope.values() {
                out.push_str(&entry.to_string());
                out.push('\n');
            }
        }
        out.push_str("========================\n");
        out
    }

    pub fn print_table(&self) {
        print!("{}", self.render_table());
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}
