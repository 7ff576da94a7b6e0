//! User configuration: indicator styling, swipe feel and keybindings.
//!
//! Stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/dot-pager/config.toml` (default `~/.config/dot-pager/config.toml`).

use std::collections::HashMap;
use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::options::IndicatorOptions;

// ───────────────────────────────────────── actions ───────────

/// All configurable user actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    ToggleNavigation,
    Quit,
}

impl Action {
    /// Ordered list of all actions (used when serialising).
    pub const ALL: &[Action] = &[
        Action::PrevPage,
        Action::NextPage,
        Action::FirstPage,
        Action::LastPage,
        Action::ToggleNavigation,
        Action::Quit,
    ];

    /// Key used in the config file.
    fn config_key(self) -> &'static str {
        match self {
            Action::PrevPage => "prev_page",
            Action::NextPage => "next_page",
            Action::FirstPage => "first_page",
            Action::LastPage => "last_page",
            Action::ToggleNavigation => "toggle_navigation",
            Action::Quit => "quit",
        }
    }

    fn from_config_key(s: &str) -> Option<Self> {
        Action::ALL.iter().copied().find(|a| a.config_key() == s)
    }
}

// ───────────────────────────────────────── key bind ──────────

/// A single key binding (key code plus modifiers).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBind {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBind {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Does this binding match a key event?  Only CTRL/ALT/SHIFT modifiers
    /// are compared (platform-specific modifiers like SUPER are ignored).
    pub fn matches(&self, event: KeyEvent) -> bool {
        let mask = KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT;
        self.code == event.code && (self.modifiers & mask) == (event.modifiers & mask)
    }

    fn modifier_prefix(&self) -> String {
        let mut s = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("Alt+");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            s.push_str("Shift+");
        }
        s
    }

    /// User-friendly display string (e.g. `"Alt+←"`, `"Ctrl+c"`, `"q"`).
    pub fn display(&self) -> String {
        let mut s = self.modifier_prefix();
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".into(),
            KeyCode::Down => "↓".into(),
            KeyCode::Left => "←".into(),
            KeyCode::Right => "→".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PgUp".into(),
            KeyCode::PageDown => "PgDn".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Serialise to config-file format (e.g. `"Alt+Left"`, `"Ctrl+c"`, `"q"`).
    fn to_config_string(&self) -> String {
        let mut s = self.modifier_prefix();
        s.push_str(&match self.code {
            KeyCode::Char(' ') => "Space".into(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "Up".into(),
            KeyCode::Down => "Down".into(),
            KeyCode::Left => "Left".into(),
            KeyCode::Right => "Right".into(),
            KeyCode::Enter => "Enter".into(),
            KeyCode::Esc => "Esc".into(),
            KeyCode::Tab => "Tab".into(),
            KeyCode::Home => "Home".into(),
            KeyCode::End => "End".into(),
            KeyCode::PageUp => "PageUp".into(),
            KeyCode::PageDown => "PageDown".into(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        s
    }

    /// Parse a key string like `"Ctrl+c"`, `"Alt+Left"`, `"q"`, `"Home"`.
    fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let parts: Vec<&str> = s.split('+').collect();
        let key_part = parts.last()?;

        for &part in &parts[..parts.len() - 1] {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key_part.to_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            s if s.starts_with('f') && s.len() > 1 => {
                let n: u8 = s[1..].parse().ok()?;
                KeyCode::F(n)
            }
            _ if key_part.chars().count() == 1 => KeyCode::Char(key_part.chars().next()?),
            _ => return None,
        };

        Some(KeyBind { code, modifiers })
    }
}

// ───────────────────────────────────────── config ────────────

/// Application configuration loaded from disk.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bindings: HashMap<Action, Vec<KeyBind>>,
    pub indicator: IndicatorOptions,
    /// Fraction of the remaining distance the pager closes per frame while
    /// settling.
    pub swipe_speed: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bindings: Self::default_bindings(),
            indicator: IndicatorOptions::default(),
            swipe_speed: 0.25,
        }
    }
}

impl AppConfig {
    pub fn default_bindings() -> HashMap<Action, Vec<KeyBind>> {
        use Action::*;
        use KeyCode::*;
        let n = KeyModifiers::NONE;
        let mut m = HashMap::new();

        m.insert(PrevPage, vec![KeyBind::new(Left, n), KeyBind::new(Char('h'), n)]);
        m.insert(NextPage, vec![KeyBind::new(Right, n), KeyBind::new(Char('l'), n)]);
        m.insert(FirstPage, vec![KeyBind::new(Home, n), KeyBind::new(Char('g'), n)]);
        m.insert(LastPage, vec![KeyBind::new(End, n), KeyBind::new(Char('G'), KeyModifiers::SHIFT)]);
        m.insert(ToggleNavigation, vec![KeyBind::new(Char('t'), n)]);
        m.insert(Quit, vec![KeyBind::new(Char('q'), n), KeyBind::new(Esc, n)]);

        m
    }

    /// Find the action that matches a key event.  When multiple bindings
    /// match, the one with the most modifiers wins.
    pub fn match_key(&self, event: KeyEvent) -> Option<Action> {
        let mut best: Option<Action> = None;
        let mut best_mod_count = 0;

        for (&action, binds) in &self.bindings {
            for bind in binds {
                if bind.matches(event) {
                    let mc = bind.modifiers.bits().count_ones();
                    if best.is_none() || mc > best_mod_count {
                        best = Some(action);
                        best_mod_count = mc;
                    }
                }
            }
        }
        best
    }

    /// Short display of the first binding only (for the status bar).
    fn short_binding(&self, action: Action) -> String {
        match self.bindings.get(&action) {
            Some(binds) if !binds.is_empty() => binds[0].display(),
            _ => "?".into(),
        }
    }

    /// Build the status-bar hint string from current bindings.
    pub fn status_bar_hint(&self) -> String {
        format!(
            "{}/{}: page | drag pages or click dots | {}: tap nav on/off | {}: quit",
            self.short_binding(Action::PrevPage),
            self.short_binding(Action::NextPage),
            self.short_binding(Action::ToggleNavigation),
            self.short_binding(Action::Quit),
        )
    }

    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!("loaded config from {}", path.display());
                Self::parse_config(&contents)
            }
            Err(_) => Self::default(),
        }
    }

    fn parse_config(s: &str) -> Self {
        let mut config = Self::default();
        let opts = &mut config.indicator;

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            // Indicator and swipe settings.
            let handled = match key {
                "dot_count" => set_parsed(key, value, &mut opts.dot_count),
                "dot_size" => set_parsed(key, value, &mut opts.dot_size),
                "dot_space" => set_parsed(key, value, &mut opts.dot_space),
                "color_default" => set_parsed(key, value, &mut opts.color_default),
                "color_selected" => set_parsed(key, value, &mut opts.color_selected),
                "animation_duration_ms" => set_parsed(key, value, &mut opts.animation_duration_ms),
                "page_navigation" => set_parsed(key, value, &mut opts.page_navigation_enabled),
                "easing" => set_parsed(key, value, &mut opts.easing),
                "padding_start" => set_parsed(key, value, &mut opts.padding.start),
                "padding_end" => set_parsed(key, value, &mut opts.padding.end),
                "padding_top" => set_parsed(key, value, &mut opts.padding.top),
                "padding_bottom" => set_parsed(key, value, &mut opts.padding.bottom),
                "swipe_speed" => {
                    if let Ok(v) = value.parse::<f64>() {
                        // Keep this bounded for predictable UX.
                        config.swipe_speed = v.clamp(0.05, 0.95);
                    }
                    true
                }
                _ => false,
            };
            if handled {
                continue;
            }

            let Some(action) = Action::from_config_key(key) else {
                continue;
            };

            let parsed: Vec<KeyBind> = value
                .split(',')
                .filter_map(|part| KeyBind::parse(part.trim().trim_matches('"')))
                .collect();
            if !parsed.is_empty() {
                config.bindings.insert(action, parsed);
            }
        }

        config
    }

    /// Render the config in file format.
    pub fn serialise(&self) -> String {
        let o = &self.indicator;
        let mut lines = vec![
            "# dot-pager configuration".to_string(),
            String::new(),
            "# Indicator".to_string(),
            format!("dot_count = {}", o.dot_count),
            format!("dot_size = {}", o.dot_size),
            format!("dot_space = {}", o.dot_space),
            format!("color_default = \"{}\"", o.color_default),
            format!("color_selected = \"{}\"", o.color_selected),
            format!("animation_duration_ms = {}", o.animation_duration_ms),
            format!("page_navigation = {}", o.page_navigation_enabled),
            format!("easing = \"{}\"", o.easing),
            format!("padding_start = {}", o.padding.start),
            format!("padding_end = {}", o.padding.end),
            format!("padding_top = {}", o.padding.top),
            format!("padding_bottom = {}", o.padding.bottom),
            String::new(),
            "# Pager".to_string(),
            format!("swipe_speed = {}", self.swipe_speed),
            String::new(),
            "# Key bindings".to_string(),
            "# Format: action = Key1, Key2, ...".to_string(),
            "# Modifiers: Ctrl+, Alt+, Shift+ (prefix)".to_string(),
            "# Special keys: Up, Down, Left, Right, Enter, Esc, Tab,".to_string(),
            "#   Home, End, PageUp, PageDown, Space, F1-F12".to_string(),
            String::new(),
        ];

        for &action in Action::ALL {
            if let Some(binds) = self.bindings.get(&action) {
                let keys: Vec<String> = binds.iter().map(|b| b.to_config_string()).collect();
                lines.push(format!("{} = {}", action.config_key(), keys.join(", ")));
            }
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Parse `value` into `slot`, keeping the old value (with a warning) when it
/// does not parse.  Always reports the key as handled.
fn set_parsed<T>(key: &str, value: &str, slot: &mut T) -> bool
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value.parse::<T>() {
        Ok(v) => *slot = v,
        Err(e) => tracing::warn!("config: ignoring {key} = {value:?}: {e}"),
    }
    true
}

/// Return the config file path (`$XDG_CONFIG_HOME/dot-pager/config.toml`).
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("dot-pager").join("config.toml")
}
