//! Node entity: one social-network user.

use serde::{Deserialize, Serialize};

pub type NodeId = u32;

pub const DEFAULT_ACTIVITY: f64 = 0.5;
pub const DEFAULT_INTERACTION: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Display-only state. Never read by algorithms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotation {
    pub selected: bool,
    pub highlighted: bool,
    pub color: Option<Rgb>,
}

impl Annotation {
    pub fn set_highlight(&mut self, highlighted: bool, color: Option<Rgb>) {
        self.highlighted = highlighted;
        self.color = if highlighted { color } else { None };
    }

    pub fn clear(&mut self) {
        self.set_highlight(false, None);
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Layout-engine velocity. Zero it whenever the node is placed by hand.
    pub vx: f64,
    pub vy: f64,
    activity: f64,
    interaction: f64,
    connection_count: usize,
    pub annotation: Annotation,
}

impl Node {
    pub(crate) fn new(id: NodeId, new_node: NewNode, (x, y): (f64, f64)) -> Self {
        let name = new_node
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| default_name(id));
        Self {
            id,
            name,
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            activity: sanitize_activity(new_node.activity.unwrap_or(DEFAULT_ACTIVITY)),
            interaction: sanitize_interaction(new_node.interaction.unwrap_or(DEFAULT_INTERACTION)),
            connection_count: 0,
            annotation: Annotation::default(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Activity level in `[0, 1]`.
    pub fn activity(&self) -> f64 {
        self.activity
    }

    pub fn interaction(&self) -> f64 {
        self.interaction
    }

    /// Always equal to the node's degree in the owning graph.
    pub fn connection_count(&self) -> usize {
        self.connection_count
    }

    pub(crate) fn set_activity(&mut self, activity: f64) {
        self.activity = sanitize_activity(activity);
    }

    pub(crate) fn set_interaction(&mut self, interaction: f64) {
        self.interaction = sanitize_interaction(interaction);
    }

    pub(crate) fn set_connection_count(&mut self, count: usize) {
        self.connection_count = count;
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn reset_velocity(&mut self) {
        self.vx = 0.0;
        self.vy = 0.0;
    }

    /// Euclidean distance in layout space.
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    pub fn set_highlight(&mut self, highlighted: bool, color: Option<Rgb>) {
        self.annotation.set_highlight(highlighted, color);
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.annotation.selected = selected;
    }

    pub fn properties(&self) -> NodeProperties {
        NodeProperties {
            id: self.id,
            name: self.name.clone(),
            x: self.x,
            y: self.y,
            activity: round2(self.activity),
            interaction: round2(self.interaction),
            connection_count: self.connection_count,
        }
    }
}

/// Rounded property view for tables and tooltips.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeProperties {
    pub id: NodeId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub activity: f64,
    pub interaction: f64,
    pub connection_count: usize,
}

/// Parameters for [`Graph::add_node`](crate::Graph::add_node). Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewNode {
    pub id: Option<NodeId>,
    pub name: Option<String>,
    pub position: Option<(f64, f64)>,
    pub activity: Option<f64>,
    pub interaction: Option<f64>,
}

impl NewNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::default().name(name)
    }

    pub fn id(mut self, id: NodeId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some((x, y));
        self
    }

    pub fn activity(mut self, activity: f64) -> Self {
        self.activity = Some(activity);
        self
    }

    pub fn interaction(mut self, interaction: f64) -> Self {
        self.interaction = Some(interaction);
        self
    }
}

/// Partial update for [`Graph::update_node`](crate::Graph::update_node).
///
/// `connection_count` is not updatable here; it only changes through edge mutations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeUpdate {
    pub name: Option<String>,
    pub position: Option<(f64, f64)>,
    pub activity: Option<f64>,
    pub interaction: Option<f64>,
}

impl NodeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.position = Some((x, y));
        self
    }

    pub fn activity(mut self, activity: f64) -> Self {
        self.activity = Some(activity);
        self
    }

    pub fn interaction(mut self, interaction: f64) -> Self {
        self.interaction = Some(interaction);
        self
    }

    pub(crate) fn touches_weight(&self) -> bool {
        self.activity.is_some() || self.interaction.is_some()
    }
}

pub fn default_name(id: NodeId) -> String {
    format!("User_{id}")
}

fn sanitize_activity(v: f64) -> f64 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        DEFAULT_ACTIVITY
    }
}

fn sanitize_interaction(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        DEFAULT_INTERACTION
    }
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_properties_are_clamped() {
        let n = Node::new(
            1,
            NewNode::new().activity(1.7).interaction(-3.0),
            (0.0, 0.0),
        );
        assert_eq!(n.activity(), 1.0);
        assert_eq!(n.interaction(), 0.0);

        let n = Node::new(2, NewNode::new().activity(f64::NAN), (0.0, 0.0));
        assert_eq!(n.activity(), DEFAULT_ACTIVITY);
    }

    #[test]
    fn empty_name_falls_back_to_user_id() {
        let n = Node::new(7, NewNode::named(""), (0.0, 0.0));
        assert_eq!(n.name, "User_7");
    }

    #[test]
    fn highlight_color_is_dropped_when_unhighlighted() {
        let mut a = Annotation::default();
        a.set_highlight(true, Some(Rgb(1, 2, 3)));
        assert_eq!(a.color, Some(Rgb(1, 2, 3)));
        a.set_highlight(false, Some(Rgb(1, 2, 3)));
        assert_eq!(a.color, None);
    }
}
