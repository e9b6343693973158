//! Keybinding registry: maps actions to key events with config overrides.
//!
//! Bindings are looked up per context (feed, search box, category browser,
//! help) with a fallback to the global context. Users override keys per action
//! through the `[keybindings]` table in config.toml.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    Advance,
    Retreat,
    OpenArticle,
    EnterSearch,
    ShowCategories,
    CycleTheme,
    ShowHelp,
    Back,
    Select,
    ChipNext,
    ChipPrev,
    NavDown,
    NavUp,
    ExitSearch,
    CommitSearch,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit application",
            Self::Advance => "Next article",
            Self::Retreat => "Previous article",
            Self::OpenArticle => "Read more in browser",
            Self::EnterSearch => "Search categories",
            Self::ShowCategories => "Browse all categories",
            Self::CycleTheme => "Cycle theme",
            Self::ShowHelp => "Show help",
            Self::Back => "Go back / dismiss",
            Self::Select => "Select / expand",
            Self::ChipNext => "Next matching category",
            Self::ChipPrev => "Previous matching category",
            Self::NavDown => "Navigate down",
            Self::NavUp => "Navigate up",
            Self::ExitSearch => "Close search",
            Self::CommitSearch => "Pick highlighted category",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context. Determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Global,
    Feed,
    Search,
    Categories,
    Help,
}

impl Context {
    /// Section title on the help screen.
    pub fn label(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Feed => "Feed",
            Self::Search => "Search",
            Self::Categories => "Category browser",
            Self::Help => "Help",
        }
    }
}

// ============================================================================
// Key Specification
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Key as received from the terminal. Shift is already folded into the
    /// character ('T' arrives as Char('T') + SHIFT), so it is dropped there.
    fn from_event(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::Char(_) => Self::new(code, modifiers.difference(KeyModifiers::SHIFT)),
            _ => Self::new(code, modifiers),
        }
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats:
/// - Single char: "q", "j", "/"
/// - Named keys: "Enter", "Esc", "Tab", "Up", "Down", "Backspace"
/// - Modifier combos: "Ctrl+d", "Ctrl+u"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    // Handle Ctrl+ prefix
    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let rest = rest.trim();
        if rest.len() == 1 {
            let c = rest.chars().next()?;
            return Some(KeySpec::ctrl(c));
        }
        return None;
    }

    // Named keys (case-insensitive)
    match s.to_lowercase().as_str() {
        "enter" | "return" => return Some(KeySpec::plain(KeyCode::Enter)),
        "esc" | "escape" => return Some(KeySpec::plain(KeyCode::Esc)),
        "tab" => return Some(KeySpec::plain(KeyCode::Tab)),
        "backtab" | "shift+tab" => return Some(KeySpec::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
        "pagedown" | "pgdn" => return Some(KeySpec::plain(KeyCode::PageDown)),
        "pageup" | "pgup" => return Some(KeySpec::plain(KeyCode::PageUp)),
        "up" => return Some(KeySpec::plain(KeyCode::Up)),
        "down" => return Some(KeySpec::plain(KeyCode::Down)),
        "left" => return Some(KeySpec::plain(KeyCode::Left)),
        "right" => return Some(KeySpec::plain(KeyCode::Right)),
        "backspace" => return Some(KeySpec::plain(KeyCode::Backspace)),
        "space" => return Some(KeySpec::plain(KeyCode::Char(' '))),
        _ => {}
    }

    // Function keys
    if s.starts_with('F') || s.starts_with('f') {
        if let Ok(n) = s[1..].parse::<u8>() {
            if (1..=12).contains(&n) {
                return Some(KeySpec::plain(KeyCode::F(n)));
            }
        }
    }

    // Single character
    if s.len() == 1 {
        let c = s.chars().next()?;
        return Some(KeySpec::plain(KeyCode::Char(c)));
    }

    None
}

/// Format a KeySpec as a human-readable string for the help screen.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Registry of keybindings, supporting default bindings and config overrides.
///
/// Lookup is O(1) via HashMap. The registry supports context-aware dispatch:
/// the same key can map to different actions in different contexts.
pub struct KeybindingRegistry {
    /// Primary lookup: (Context, KeySpec) -> Action
    lookup: HashMap<(Context, KeySpec), Action>,
    /// All bindings for help screen enumeration
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    /// Create a registry with the default bindings.
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    /// Register a single binding.
    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    /// Register all default bindings.
    fn register_defaults(&mut self) {
        // === Global ===
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Char('q')),
            Action::Quit,
        );
        self.bind(Context::Global, KeySpec::ctrl('c'), Action::Quit);
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Char('T')),
            Action::CycleTheme,
        );
        self.bind(
            Context::Global,
            KeySpec::plain(KeyCode::Char('?')),
            Action::ShowHelp,
        );

        // === Feed ===
        // Pagination
        self.bind(
            Context::Feed,
            KeySpec::plain(KeyCode::Char('j')),
            Action::Advance,
        );
        self.bind(Context::Feed, KeySpec::plain(KeyCode::Down), Action::Advance);
        self.bind(
            Context::Feed,
            KeySpec::plain(KeyCode::Char('k')),
            Action::Retreat,
        );
        self.bind(Context::Feed, KeySpec::plain(KeyCode::Up), Action::Retreat);

        self.bind(
            Context::Feed,
            KeySpec::plain(KeyCode::Char('o')),
            Action::OpenArticle,
        );
        self.bind(
            Context::Feed,
            KeySpec::plain(KeyCode::Char('/')),
            Action::EnterSearch,
        );
        self.bind(
            Context::Feed,
            KeySpec::plain(KeyCode::Char('c')),
            Action::ShowCategories,
        );

        // === Search box ===
        self.bind(
            Context::Search,
            KeySpec::plain(KeyCode::Esc),
            Action::ExitSearch,
        );
        self.bind(
            Context::Search,
            KeySpec::plain(KeyCode::Enter),
            Action::CommitSearch,
        );
        self.bind(Context::Search, KeySpec::plain(KeyCode::Tab), Action::ChipNext);
        self.bind(
            Context::Search,
            KeySpec::plain(KeyCode::Right),
            Action::ChipNext,
        );
        self.bind(
            Context::Search,
            KeySpec::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::ChipPrev,
        );
        self.bind(
            Context::Search,
            KeySpec::plain(KeyCode::Left),
            Action::ChipPrev,
        );

        // === Category browser ===
        self.bind(Context::Categories, KeySpec::plain(KeyCode::Esc), Action::Back);
        self.bind(
            Context::Categories,
            KeySpec::plain(KeyCode::Enter),
            Action::Select,
        );
        self.bind(
            Context::Categories,
            KeySpec::plain(KeyCode::Down),
            Action::NavDown,
        );
        self.bind(
            Context::Categories,
            KeySpec::plain(KeyCode::Up),
            Action::NavUp,
        );

        // === Help ===
        self.bind(Context::Help, KeySpec::plain(KeyCode::Esc), Action::Back);
        self.bind(
            Context::Help,
            KeySpec::plain(KeyCode::Char('?')),
            Action::Back,
        );
    }

    /// Apply user overrides from config keybindings map.
    ///
    /// Keys in the map are action names (e.g., "quit", "nav_down").
    /// Values are key strings (e.g., "q", "Ctrl+d", "F5").
    ///
    /// Returns a list of warnings for unrecognized action names or unparseable keys.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (action_name, key_str) in overrides {
            let action = match parse_action_name(action_name) {
                Some(a) => a,
                None => {
                    warnings.push(format!("Unknown action '{}', ignoring", action_name));
                    continue;
                }
            };

            let key = match parse_key_string(key_str) {
                Some(k) => k,
                None => {
                    warnings.push(format!(
                        "Cannot parse key '{}' for action '{}', ignoring",
                        key_str, action_name
                    ));
                    continue;
                }
            };

            // Remove old bindings for this action (in all contexts where it's bound)
            let mut contexts_for_action: Vec<Context> = Vec::new();
            for (ctx, _, a) in &self.bindings {
                if *a == action && !contexts_for_action.contains(ctx) {
                    contexts_for_action.push(*ctx);
                }
            }

            // Remove old entries from lookup
            self.lookup.retain(|_, a| *a != action);
            self.bindings.retain(|(_, _, a)| *a != action);

            // Re-bind in the same contexts with the new key
            for ctx in contexts_for_action {
                self.bind(ctx, key, action);
            }

            tracing::info!(
                action = %action_name,
                key = %key_str,
                "Applied keybinding override"
            );
        }

        warnings
    }

    /// Look up the action for a given key in a given context.
    ///
    /// Tries the specific context first, then falls back to Global.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        let key = KeySpec::from_event(code, modifiers);

        // Try specific context first
        if let Some(&action) = self.lookup.get(&(context, key)) {
            return Some(action);
        }

        // Fall back to Global (unless we're already looking at Global)
        if context != Context::Global {
            if let Some(&action) = self.lookup.get(&(Context::Global, key)) {
                return Some(action);
            }
        }

        None
    }

    /// Look up a binding in `context` only, without the Global fallback.
    ///
    /// Text inputs use this so typed characters never trigger global actions.
    pub fn context_action(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        self.lookup
            .get(&(context, KeySpec::from_event(code, modifiers)))
            .copied()
    }

    /// Display string of the first key bound to `action` in `context`.
    pub fn key_for(&self, action: Action, context: Context) -> Option<String> {
        self.bindings
            .iter()
            .find(|(ctx, _, a)| *ctx == context && *a == action)
            .map(|(_, key, _)| format_key(key))
    }

    /// Get all bindings for the help screen.
    ///
    /// Returns (context, key_display_string, action, description) tuples.
    pub fn all_bindings(&self) -> Vec<(Context, String, Action, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, key, action)| (*ctx, format_key(key), *action, action.describe()))
            .collect()
    }
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an action name string (from config) into an Action enum.
fn parse_action_name(name: &str) -> Option<Action> {
    match name.to_lowercase().as_str() {
        "quit" => Some(Action::Quit),
        "advance" | "next" | "next_article" => Some(Action::Advance),
        "retreat" | "previous" | "prev" | "previous_article" => Some(Action::Retreat),
        "open_article" | "openarticle" | "open" | "read_more" => Some(Action::OpenArticle),
        "enter_search" | "entersearch" | "search" => Some(Action::EnterSearch),
        "show_categories" | "showcategories" | "categories" => Some(Action::ShowCategories),
        "cycle_theme" | "cycletheme" | "theme" => Some(Action::CycleTheme),
        "show_help" | "showhelp" | "help" => Some(Action::ShowHelp),
        "back" => Some(Action::Back),
        "select" | "enter" => Some(Action::Select),
        "chip_next" | "chipnext" => Some(Action::ChipNext),
        "chip_prev" | "chipprev" => Some(Action::ChipPrev),
        "nav_down" | "navdown" | "down" => Some(Action::NavDown),
        "nav_up" | "navup" | "up" => Some(Action::NavUp),
        "exit_search" | "exitsearch" => Some(Action::ExitSearch),
        "commit_search" | "commitsearch" => Some(Action::CommitSearch),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_quit() {
        let reg = KeybindingRegistry::new();
        let action = reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Global);
        assert_eq!(action, Some(Action::Quit));
        assert_eq!(
            reg.action_for_key(KeyCode::Char('c'), KeyModifiers::CONTROL, Context::Feed),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_key_for_reflects_overrides() {
        let mut reg = KeybindingRegistry::new();
        assert_eq!(
            reg.key_for(Action::ShowCategories, Context::Feed).as_deref(),
            Some("c")
        );
        assert_eq!(reg.key_for(Action::ShowCategories, Context::Search), None);

        let mut overrides = HashMap::new();
        overrides.insert("categories".to_string(), "Ctrl+g".to_string());
        reg.apply_overrides(&overrides);
        assert_eq!(
            reg.key_for(Action::ShowCategories, Context::Feed).as_deref(),
            Some("Ctrl+g")
        );
    }

    #[test]
    fn test_default_feed_keys() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('j'), KeyModifiers::NONE, Context::Feed),
            Some(Action::Advance)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Down, KeyModifiers::NONE, Context::Feed),
            Some(Action::Advance)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('k'), KeyModifiers::NONE, Context::Feed),
            Some(Action::Retreat)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Up, KeyModifiers::NONE, Context::Feed),
            Some(Action::Retreat)
        );
    }

    #[test]
    fn test_feed_falls_back_to_global() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('T'), KeyModifiers::NONE, Context::Feed),
            Some(Action::CycleTheme)
        );
    }

    #[test]
    fn test_shifted_chars_match_plain_bindings() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('T'), KeyModifiers::SHIFT, Context::Feed),
            Some(Action::CycleTheme)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('?'), KeyModifiers::SHIFT, Context::Feed),
            Some(Action::ShowHelp)
        );
    }

    #[test]
    fn test_categories_context_overrides_feed_keys() {
        let reg = KeybindingRegistry::new();
        // Down navigates the list in the browser, it does not page the feed
        assert_eq!(
            reg.action_for_key(KeyCode::Down, KeyModifiers::NONE, Context::Categories),
            Some(Action::NavDown)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Esc, KeyModifiers::NONE, Context::Categories),
            Some(Action::Back)
        );
    }

    #[test]
    fn test_search_context() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Esc, KeyModifiers::NONE, Context::Search),
            Some(Action::ExitSearch)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Enter, KeyModifiers::NONE, Context::Search),
            Some(Action::CommitSearch)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::BackTab, KeyModifiers::SHIFT, Context::Search),
            Some(Action::ChipPrev)
        );
    }

    #[test]
    fn test_context_action_has_no_global_fallback() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.context_action(KeyCode::Char('q'), KeyModifiers::NONE, Context::Search),
            None
        );
        assert_eq!(
            reg.context_action(KeyCode::Enter, KeyModifiers::NONE, Context::Search),
            Some(Action::CommitSearch)
        );
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::F(12), KeyModifiers::NONE, Context::Global),
            None
        );
    }

    #[test]
    fn test_open_only_in_feed() {
        let reg = KeybindingRegistry::new();
        assert_eq!(
            reg.action_for_key(KeyCode::Char('o'), KeyModifiers::NONE, Context::Feed),
            Some(Action::OpenArticle)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('o'), KeyModifiers::NONE, Context::Categories),
            None
        );
    }

    #[test]
    fn test_apply_overrides_valid() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("quit".to_string(), "Ctrl+q".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert!(warnings.is_empty());

        // Old bindings should be gone
        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::NONE, Context::Global),
            None
        );
        // New binding should work
        assert_eq!(
            reg.action_for_key(KeyCode::Char('q'), KeyModifiers::CONTROL, Context::Global),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_apply_overrides_unknown_action() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("nonexistent_action".to_string(), "q".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Unknown action"));
    }

    #[test]
    fn test_apply_overrides_bad_key() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("quit".to_string(), "Ctrl+Alt+Shift+Q".to_string());

        let warnings = reg.apply_overrides(&overrides);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Cannot parse key"));
    }

    #[test]
    fn test_parse_key_string_named_keys() {
        assert_eq!(
            parse_key_string("Enter"),
            Some(KeySpec::plain(KeyCode::Enter))
        );
        assert_eq!(parse_key_string("esc"), Some(KeySpec::plain(KeyCode::Esc)));
        assert_eq!(parse_key_string("Tab"), Some(KeySpec::plain(KeyCode::Tab)));
        assert_eq!(
            parse_key_string("space"),
            Some(KeySpec::plain(KeyCode::Char(' ')))
        );
        assert_eq!(
            parse_key_string("PageDown"),
            Some(KeySpec::plain(KeyCode::PageDown))
        );
    }

    #[test]
    fn test_parse_key_string_function_keys() {
        assert_eq!(parse_key_string("F1"), Some(KeySpec::plain(KeyCode::F(1))));
        assert_eq!(
            parse_key_string("F12"),
            Some(KeySpec::plain(KeyCode::F(12)))
        );
        assert_eq!(parse_key_string("F0"), None);
        assert_eq!(parse_key_string("F13"), None);
    }

    #[test]
    fn test_parse_key_string_ctrl() {
        assert_eq!(parse_key_string("Ctrl+d"), Some(KeySpec::ctrl('d')));
        assert_eq!(parse_key_string("Ctrl+n"), Some(KeySpec::ctrl('n')));
    }

    #[test]
    fn test_parse_key_string_single_char() {
        assert_eq!(
            parse_key_string("n"),
            Some(KeySpec::plain(KeyCode::Char('n')))
        );
        assert_eq!(
            parse_key_string("/"),
            Some(KeySpec::plain(KeyCode::Char('/')))
        );
    }

    #[test]
    fn test_all_bindings_non_empty() {
        let reg = KeybindingRegistry::new();
        let bindings = reg.all_bindings();
        assert!(bindings.len() >= 20);
    }

    #[test]
    fn test_action_describe() {
        assert_eq!(Action::Quit.describe(), "Quit application");
        assert_eq!(Action::Advance.describe(), "Next article");
        assert_eq!(Action::OpenArticle.describe(), "Read more in browser");
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key(&KeySpec::plain(KeyCode::Char('q'))), "q");
        assert_eq!(format_key(&KeySpec::ctrl('c')), "Ctrl+c");
        assert_eq!(format_key(&KeySpec::plain(KeyCode::Enter)), "Enter");
        assert_eq!(format_key(&KeySpec::plain(KeyCode::F(5))), "F5");
        assert_eq!(
            format_key(&KeySpec::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            "Shift+Tab"
        );
    }

    #[test]
    fn test_override_preserves_contexts() {
        let mut reg = KeybindingRegistry::new();
        // Back is bound in Categories and Help
        let mut overrides = HashMap::new();
        overrides.insert("back".to_string(), "x".to_string());
        let warnings = reg.apply_overrides(&overrides);
        assert!(warnings.is_empty());

        for ctx in [Context::Categories, Context::Help] {
            assert_eq!(
                reg.action_for_key(KeyCode::Char('x'), KeyModifiers::NONE, ctx),
                Some(Action::Back)
            );
            assert_eq!(
                reg.action_for_key(KeyCode::Esc, KeyModifiers::NONE, ctx),
                None
            );
        }
    }

    #[test]
    fn test_override_advance_key() {
        let mut reg = KeybindingRegistry::new();
        let mut overrides = HashMap::new();
        overrides.insert("next".to_string(), "n".to_string());
        assert!(reg.apply_overrides(&overrides).is_empty());

        assert_eq!(
            reg.action_for_key(KeyCode::Char('n'), KeyModifiers::NONE, Context::Feed),
            Some(Action::Advance)
        );
        assert_eq!(
            reg.action_for_key(KeyCode::Char('j'), KeyModifiers::NONE, Context::Feed),
            None
        );
    }
}
