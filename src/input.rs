//! Player input for the orbiter.
//!
//! Arrow keys fire the thrusters, Space clears the trail, M shows the
//! soil-moisture map, Escape leaves full screen. Keyboard state is turned
//! into [`InputEvent`]s; the simulation core only reacts to
//! [`InputEvent::AxisAdjust`].

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy::window::WindowCloseRequested;

/// Thruster axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Map key transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyState {
    Down,
    Up,
}

/// One input event delivered to the simulation and its collaborators.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Fire a thruster along `axis`, changing velocity by `delta`.
    AxisAdjust(Axis, f64),
    /// Erase the drawn trajectory.
    ClearTrail,
    /// The map key went down or a key was released.
    ToggleMapKey(KeyState),
    /// Leave full screen.
    Escape,
    /// Shut down.
    Quit,
}

impl InputEvent {
    /// Velocity change carried by a thrust event.
    pub fn thrust_delta(&self) -> Option<DVec2> {
        match *self {
            InputEvent::AxisAdjust(Axis::X, delta) => Some(DVec2::new(delta, 0.0)),
            InputEvent::AxisAdjust(Axis::Y, delta) => Some(DVec2::new(0.0, delta)),
            _ => None,
        }
    }
}

/// How simultaneously held thrust keys are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThrustPolicy {
    /// Only the first held key fires, checked Right, Left, Up, Down.
    #[default]
    Exclusive,
    /// Every held key fires its own thrust event, each costing fuel.
    Additive,
}

/// Snapshot of the four thrust keys for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThrustKeys {
    pub right: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
}

impl ThrustKeys {
    /// Read the arrow keys.
    pub fn from_keyboard(keys: &ButtonInput<KeyCode>) -> Self {
        Self {
            right: keys.pressed(KeyCode::ArrowRight),
            left: keys.pressed(KeyCode::ArrowLeft),
            up: keys.pressed(KeyCode::ArrowUp),
            down: keys.pressed(KeyCode::ArrowDown),
        }
    }

    /// Thrust events for this tick.
    ///
    /// Screen y grows downward, so Up decreases dy.
    pub fn thrust_events(self, policy: ThrustPolicy, step: f64) -> Vec<InputEvent> {
        let candidates = [
            (self.right, InputEvent::AxisAdjust(Axis::X, step)),
            (self.left, InputEvent::AxisAdjust(Axis::X, -step)),
            (self.up, InputEvent::AxisAdjust(Axis::Y, -step)),
            (self.down, InputEvent::AxisAdjust(Axis::Y, step)),
        ];
        let held = candidates
            .into_iter()
            .filter_map(|(pressed, event)| pressed.then_some(event));

        match policy {
            ThrustPolicy::Exclusive => held.take(1).collect(),
            ThrustPolicy::Additive => held.collect(),
        }
    }
}

/// Plugin translating keyboard edges into [`InputEvent`] messages.
///
/// Held thrust keys are sampled by the simulation's fixed-step system
/// instead, so a key held across several frames fires once per tick.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<InputEvent>()
            .add_systems(Update, (keyboard_edges, close_requests));
    }
}

/// Emit non-thrust input events for key presses and releases.
pub fn keyboard_edges(keys: Res<ButtonInput<KeyCode>>, mut events: MessageWriter<InputEvent>) {
    for event in edge_events(&keys) {
        events.write(event);
    }
}

/// A window close request becomes [`InputEvent::Quit`].
pub fn close_requests(
    mut requests: MessageReader<WindowCloseRequested>,
    mut events: MessageWriter<InputEvent>,
) {
    if requests.read().next().is_some() {
        events.write(InputEvent::Quit);
    }
}

/// Non-thrust events implied by this frame's key transitions.
pub fn edge_events(keys: &ButtonInput<KeyCode>) -> Vec<InputEvent> {
    let mut events = Vec::new();

    if keys.just_pressed(KeyCode::Escape) {
        events.push(InputEvent::Escape);
    }
    if keys.just_pressed(KeyCode::Space) {
        events.push(InputEvent::ClearTrail);
    }
    // Any release turns the map off; checked before the press so a same-frame
    // re-press of M leaves it on.
    if keys.get_just_released().next().is_some() {
        events.push(InputEvent::ToggleMapKey(KeyState::Up));
    }
    if keys.just_pressed(KeyCode::KeyM) {
        events.push(InputEvent::ToggleMapKey(KeyState::Down));
    }

    events
}
