/// Mock UI builder for tests (no windowing or GUI backend required)
///
/// Records every widget it is asked to draw along with the value it was
/// shown, and applies scripted edits to chosen labels.

use std::collections::HashMap;
use glam::{Vec2, Vec3};
use super::UiBuilder;

/// Value held by a widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiValue {
    Float(f32),
    Float2(Vec2),
    Float3(Vec3),
}

#[derive(Debug, Default)]
pub struct MockUi {
    /// Whether `begin_group` reports the group as open
    pub group_open: bool,
    /// Groups opened, in call order
    pub groups: Vec<String>,
    /// Number of `end_group` calls
    pub end_group_calls: u32,
    /// Widgets drawn, in call order, with the value displayed
    pub shown: Vec<(String, UiValue)>,
    edits: HashMap<String, UiValue>,
}

impl MockUi {
    pub fn new() -> Self {
        Self { group_open: true, ..Default::default() }
    }

    /// Make the widget labelled `label` report `value` as a user edit.
    pub fn script_edit(&mut self, label: &str, value: UiValue) {
        self.edits.insert(label.to_string(), value);
    }

    /// Value displayed by the widget labelled `label`, if drawn.
    pub fn shown_value(&self, label: &str) -> Option<UiValue> {
        self.shown.iter().find(|(l, _)| l == label).map(|(_, v)| *v)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.shown.iter().map(|(l, _)| l.as_str()).collect()
    }
}

impl UiBuilder for MockUi {
    fn begin_group(&mut self, label: &str) -> bool {
        self.groups.push(label.to_string());
        self.group_open
    }

    fn end_group(&mut self) {
        self.end_group_calls += 1;
    }

    fn add_float_var(&mut self, label: &str, value: &mut f32, _min: f32, _max: f32, _step: f32) -> bool {
        self.shown.push((label.to_string(), UiValue::Float(*value)));
        match self.edits.get(label) {
            Some(UiValue::Float(edit)) => {
                *value = *edit;
                true
            }
            _ => false,
        }
    }

    fn add_float2_var(&mut self, label: &str, value: &mut Vec2, _min: f32, _max: f32, _step: f32) -> bool {
        self.shown.push((label.to_string(), UiValue::Float2(*value)));
        match self.edits.get(label) {
            Some(UiValue::Float2(edit)) => {
                *value = *edit;
                true
            }
            _ => false,
        }
    }

    fn add_float3_var(&mut self, label: &str, value: &mut Vec3, _min: f32, _max: f32, _step: f32) -> bool {
        self.shown.push((label.to_string(), UiValue::Float3(*value)));
        match self.edits.get(label) {
            Some(UiValue::Float3(edit)) => {
                *value = *edit;
                true
            }
            _ => false,
        }
    }
}
