//! Settings page state: field model, nested payload building, save/restart
//! transitions

use serde_json::{Map, Value};

/// Value of one settings field. The kind decides how the field renders and
/// how it serializes into the settings mapping.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    /// Raw input text; parsed to an integer at submit time.
    Number(String),
    Checkbox(bool),
}

impl FieldValue {
    /// JSON value this field contributes to the settings mapping. Non-numeric
    /// text in a number field serializes as `null`, never as `0`.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::Number(text) => match text.trim().parse::<i64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::Null,
            },
            FieldValue::Checkbox(checked) => Value::Bool(*checked),
        }
    }
}

/// One settings form field addressed by a `.`-delimited path into the nested
/// settings mapping, e.g. `global.general.search_limit`.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingField {
    pub path: String,
    pub label: String,
    pub value: FieldValue,
}

impl SettingField {
    pub fn text(path: &str, label: &str, value: &str) -> Self {
        Self {
            path: path.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(value.to_string()),
        }
    }

    pub fn number(path: &str, label: &str, value: &str) -> Self {
        Self {
            path: path.to_string(),
            label: label.to_string(),
            value: FieldValue::Number(value.to_string()),
        }
    }

    pub fn checkbox(path: &str, label: &str, checked: bool) -> Self {
        Self {
            path: path.to_string(),
            label: label.to_string(),
            value: FieldValue::Checkbox(checked),
        }
    }
}

/// Fixed schema for the global settings tabs. Values are overlaid from the
/// fetched settings mapping before display.
pub fn default_fields() -> Vec<SettingField> {
    vec![
        SettingField::text("global.general.download_path", "Download path", "./downloads/"),
        SettingField::text("global.general.download_quality", "Download quality", "hifi"),
        SettingField::number("global.general.search_limit", "Search limit", "10"),
        SettingField::text(
            "global.formatting.album_format",
            "Album folder format",
            "{name}{explicit}",
        ),
        SettingField::text(
            "global.formatting.track_filename_format",
            "Track filename format",
            "{track_number}. {name}",
        ),
        SettingField::checkbox("global.advanced.proprietary_codecs", "Proprietary codecs", false),
        SettingField::checkbox("global.advanced.spatial_codecs", "Spatial codecs", true),
        SettingField::checkbox("global.advanced.debug_mode", "Debug mode", false),
        SettingField::checkbox(
            "global.advanced.disable_subscription_checks",
            "Disable subscription checks",
            false,
        ),
    ]
}

/// Build the field list for a fetched settings mapping: the fixed global
/// schema overlaid with current values, plus one field per scalar leaf under
/// `modules.*` with the kind inferred from the JSON type.
pub fn fields_from_settings(settings: &Value) -> Vec<SettingField> {
    let mut fields = default_fields();
    for field in &mut fields {
        if let Some(value) = lookup_path(settings, &field.path) {
            field.value = match (&field.value, value) {
                (FieldValue::Text(_), Value::String(s)) => FieldValue::Text(s.clone()),
                (FieldValue::Number(_), Value::Number(n)) => FieldValue::Number(n.to_string()),
                (FieldValue::Checkbox(_), Value::Bool(b)) => FieldValue::Checkbox(*b),
                (current, _) => current.clone(),
            };
        }
    }

    if let Some(Value::Object(modules)) = settings.get("modules") {
        let mut module_names: Vec<&String> = modules.keys().collect();
        module_names.sort();
        for name in module_names {
            let Some(Value::Object(entries)) = modules.get(name) else {
                continue;
            };
            let mut keys: Vec<&String> = entries.keys().collect();
            keys.sort();
            for key in keys {
                let path = format!("modules.{name}.{key}");
                let label = format!("{name}: {key}");
                let field = match entries.get(key) {
                    Some(Value::Bool(b)) => SettingField::checkbox(&path, &label, *b),
                    Some(Value::Number(n)) => SettingField::number(&path, &label, &n.to_string()),
                    Some(Value::String(s)) => SettingField::text(&path, &label, s),
                    // Nested or null module values have no form rendering.
                    _ => continue,
                };
                fields.push(field);
            }
        }
    }

    fields
}

fn lookup_path<'a>(settings: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = settings;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Fold the flat field list into the nested settings mapping.
///
/// Paths split on `.`; intermediate objects are created as needed (a scalar
/// in the way is replaced). Fields with an empty path are skipped.
pub fn build_settings_payload(fields: &[SettingField]) -> Value {
    let mut root = Map::new();
    for field in fields {
        if field.path.is_empty() {
            continue;
        }
        let segments: Vec<&str> = field.path.split('.').collect();
        insert_path(&mut root, &segments, field.value.to_json());
    }
    Value::Object(root)
}

fn insert_path(node: &mut Map<String, Value>, segments: &[&str], leaf: Value) {
    match segments {
        [] => {}
        [key] => {
            node.insert((*key).to_string(), leaf);
        }
        [key, rest @ ..] => {
            let entry = node
                .entry((*key).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(child) = entry {
                insert_path(child, rest, leaf);
            }
        }
    }
}

/// Save/restart state for the settings page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsState {
    pub fields: Vec<SettingField>,
    saving: bool,
    restart_enabled: bool,
    restarting: bool,
}

impl SettingsState {
    pub fn from_settings(settings: &Value) -> Self {
        Self {
            fields: fields_from_settings(settings),
            ..Default::default()
        }
    }

    pub fn set_field(&mut self, index: usize, value: FieldValue) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value;
        }
    }

    /// Start a save. Returns false while another save is in flight.
    pub fn begin_save(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        true
    }

    /// Settle a save; a success arms the restart control.
    pub fn finish_save(&mut self, success: bool) {
        self.saving = false;
        if success {
            self.restart_enabled = true;
        }
    }

    /// Start a restart request. Returns false if one is already in flight.
    pub fn begin_restart(&mut self) -> bool {
        if self.restarting {
            return false;
        }
        self.restarting = true;
        true
    }

    /// Settle a restart; a success disarms the restart control again.
    pub fn finish_restart(&mut self, success: bool) {
        self.restarting = false;
        if success {
            self.restart_enabled = false;
        }
    }

    pub fn saving(&self) -> bool {
        self.saving
    }

    pub fn restart_enabled(&self) -> bool {
        self.restart_enabled
    }

    pub fn restarting(&self) -> bool {
        self.restarting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dotted_paths_build_a_nested_mapping() {
        let fields = vec![
            SettingField::text("a.b", "B", "x"),
            SettingField::checkbox("a.c", "C", true),
        ];
        assert_eq!(build_settings_payload(&fields), json!({"a": {"b": "x", "c": true}}));
    }

    #[test]
    fn deep_paths_create_intermediate_objects() {
        let fields = vec![SettingField::number("global.general.search_limit", "Limit", "25")];
        assert_eq!(
            build_settings_payload(&fields),
            json!({"global": {"general": {"search_limit": 25}}})
        );
    }

    #[test]
    fn non_numeric_number_field_serializes_as_null() {
        let fields = vec![SettingField::number("a.n", "N", "not a number")];
        assert_eq!(build_settings_payload(&fields), json!({"a": {"n": null}}));
    }

    #[test]
    fn empty_path_fields_are_skipped() {
        let fields = vec![
            SettingField::text("", "Unnamed", "ignored"),
            SettingField::text("kept", "Kept", "yes"),
        ];
        assert_eq!(build_settings_payload(&fields), json!({"kept": "yes"}));
    }

    #[test]
    fn fields_overlay_fetched_values() {
        let settings = json!({
            "global": {
                "general": {"download_path": "/music", "search_limit": 25},
                "advanced": {"debug_mode": true}
            }
        });
        let fields = fields_from_settings(&settings);
        let by_path = |path: &str| {
            fields
                .iter()
                .find(|f| f.path == path)
                .map(|f| f.value.clone())
        };
        assert_eq!(
            by_path("global.general.download_path"),
            Some(FieldValue::Text("/music".to_string()))
        );
        assert_eq!(
            by_path("global.general.search_limit"),
            Some(FieldValue::Number("25".to_string()))
        );
        assert_eq!(
            by_path("global.advanced.debug_mode"),
            Some(FieldValue::Checkbox(true))
        );
        // Untouched schema entries keep their defaults.
        assert_eq!(
            by_path("global.general.download_quality"),
            Some(FieldValue::Text("hifi".to_string()))
        );
    }

    #[test]
    fn module_leaves_become_fields_in_stable_order() {
        let settings = json!({
            "modules": {
                "qobuz": {"app_id": "123", "quality": 27},
                "deezer": {"arl": "token", "use_cache": false}
            }
        });
        let fields = fields_from_settings(&settings);
        let module_paths: Vec<&str> = fields
            .iter()
            .filter(|f| f.path.starts_with("modules."))
            .map(|f| f.path.as_str())
            .collect();
        assert_eq!(
            module_paths,
            vec![
                "modules.deezer.arl",
                "modules.deezer.use_cache",
                "modules.qobuz.app_id",
                "modules.qobuz.quality",
            ]
        );
    }

    #[test]
    fn save_guard_rejects_concurrent_submissions() {
        let mut state = SettingsState::default();
        assert!(state.begin_save());
        assert!(!state.begin_save());
        state.finish_save(false);
        assert!(state.begin_save());
    }

    #[test]
    fn restart_control_arms_exactly_once_on_save_success() {
        let mut state = SettingsState::default();
        assert!(!state.restart_enabled());

        state.begin_save();
        state.finish_save(true);
        assert!(state.restart_enabled());

        // A second successful save leaves it armed rather than toggling.
        state.begin_save();
        state.finish_save(true);
        assert!(state.restart_enabled());
    }

    #[test]
    fn failed_save_does_not_arm_restart() {
        let mut state = SettingsState::default();
        state.begin_save();
        state.finish_save(false);
        assert!(!state.restart_enabled());
    }

    #[test]
    fn successful_restart_disarms_the_control() {
        let mut state = SettingsState::default();
        state.begin_save();
        state.finish_save(true);

        assert!(state.begin_restart());
        assert!(state.restarting());
        state.finish_restart(true);
        assert!(!state.restarting());
        assert!(!state.restart_enabled());
    }

    #[test]
    fn failed_restart_keeps_the_control_armed() {
        let mut state = SettingsState::default();
        state.begin_save();
        state.finish_save(true);

        state.begin_restart();
        state.finish_restart(false);
        assert!(state.restart_enabled());
    }
}
