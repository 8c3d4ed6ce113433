//! # Virtual Stick Plugin
//!
//! Drives every [`VirtualStick`] in the world once per frame.
//!
//! This plugin manages:
//! 1. Applying [`StickDragMessage`]s to the addressed sticks.
//! 2. Ticking the sticks against the current [`TouchFrame`].
//! 3. Mirroring the active stick into [`StickOutput`].
//! 4. Rendering the stick head, debug text and idle/active tint.
//!
//! Touch capture lives in [`touch_input`](crate::plugins::touch_input) and runs before
//! [`StickSystems`], so events are always applied before the frame update.

use bevy::prelude::*;

use crate::prelude::{
    stick_drag::StickDragMessage,
    stick_head::{debug_label, StickHead},
    stick_output::StickOutput,
    stick_parts::{StickDebugText, StickKnob},
    stick_settings::StickSettings,
    stick_style::StickStyle,
    touch_frame::TouchFrame,
    virtual_stick::{StickInputSource, VirtualStick},
};

/// Ordering label for the stick update chain.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct StickSystems;

pub(crate) fn plugin(app: &mut App) {
    app
        .init_resource::<StickSettings>()
        .init_resource::<StickStyle>()
        .init_resource::<StickOutput>()
        .init_resource::<TouchFrame>()
        .add_message::<StickDragMessage>()
        .register_type::<StickSettings>()
        .register_type::<StickStyle>()
        .register_type::<StickOutput>()
        .register_type::<TouchFrame>()
        .register_type::<VirtualStick>()
        .register_type::<StickHead>()
        .add_systems(Update, (
            stick_drag_system,
            virtual_stick_tick_system,
            stick_output_system,
            stick_range_system,
            stick_head_system::<VirtualStick>,
            stick_tint_system,
        ).chain().in_set(StickSystems));
}

/// Spawns a stick region with its head and, if enabled, its debug text.
/// The region is positioned using `VMin` to stay responsive across screen sizes.
pub fn spawn_virtual_stick(mut commands: Commands, settings: Res<StickSettings>, style: Res<StickStyle>) {
    let stick = spawn_stick(&mut commands, &settings, &style);
    info!("spawned virtual stick {stick} ({} mode)", if settings.uses_delta_input { "delta" } else { "absolute" });
}

/// Builds the stick hierarchy and returns the region entity.
pub fn spawn_stick(commands: &mut Commands, settings: &StickSettings, style: &StickStyle) -> Entity {
    let knob = commands.spawn((
        StickKnob,
        Node {
            width: Val::VMin(style.knob_size_vmin),
            height: Val::VMin(style.knob_size_vmin),
            max_width: Val::Px(style.knob_max_px),
            max_height: Val::Px(style.knob_max_px),
            min_width: Val::Px(style.knob_min_px),
            min_height: Val::Px(style.knob_min_px),
            position_type: PositionType::Relative,
            ..default()
        },
        BackgroundColor(style.knob_color.with_alpha(style.alpha_idle)),
        BorderRadius::all(Val::Percent(50.0)),
    )).id();

    let debug_text = style.shows_debug_text.then(|| {
        commands.spawn((
            StickDebugText,
            Text::new(debug_label(Vec2::ZERO)),
            TextFont { font_size: style.debug_font_size, ..default() },
            TextColor(Color::WHITE),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Percent(100.0),
                ..default()
            },
        )).id()
    });

    let region = commands.spawn((
        VirtualStick::new(settings.clone()),
        StickHead {
            knob: Some(knob),
            debug_text,
            range_radius: 0.0,
            shows_stick_head: style.shows_stick_head,
            shows_debug_text: style.shows_debug_text,
        },
        Node {
            width: Val::VMin(style.base_size_vmin),
            height: Val::VMin(style.base_size_vmin),
            max_width: Val::Px(style.base_max_px),
            max_height: Val::Px(style.base_max_px),
            min_width: Val::Px(style.base_min_px),
            min_height: Val::Px(style.base_min_px),
            position_type: PositionType::Absolute,
            left: Val::VMin(style.pos_left_vmin),
            bottom: Val::VMin(style.pos_bottom_vmin),
            display: Display::Flex,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            ..default()
        },
        BackgroundColor(style.base_color.with_alpha(style.alpha_idle)),
        BorderRadius::all(Val::Percent(50.0)),
        ZIndex(100),
    )).add_child(knob).id();

    if let Some(text) = debug_text {
        commands.entity(region).add_child(text);
    }
    region
}

fn stick_drag_system(
    mut drags: MessageReader<StickDragMessage>,
    frame: Res<TouchFrame>,
    mut q_stick: Query<&mut VirtualStick>,
) {
    for drag in drags.read() {
        let Ok(mut stick) = q_stick.get_mut(drag.stick()) else { continue; };
        match *drag {
            StickDragMessage::Begin { touch_id, .. } => stick.on_drag_begin(touch_id, frame.touches()),
            StickDragMessage::End { touch_id, .. } => stick.on_drag_end(touch_id, frame.touches()),
        }
    }
}

fn virtual_stick_tick_system(frame: Res<TouchFrame>, mut q_stick: Query<&mut VirtualStick>) {
    for mut stick in &mut q_stick {
        stick.tick(frame.touches());
    }
}

/// Copies the first tracking stick into [StickOutput], or zero when none is tracking.
fn stick_output_system(q_stick: Query<&VirtualStick>, mut output: ResMut<StickOutput>) {
    let active = q_stick.iter().find(|stick| stick.is_tracking());

    let dir = active.map_or(Vec2::ZERO, |stick| stick.stick_input());
    let tracking = active.is_some();
    if output.dir != dir || output.tracking != tracking {
        output.dir = dir;
        output.tracking = tracking;
    }
}

/// Re-measures the head range whenever layout resizes the region.
fn stick_range_system(mut q_head: Query<(&ComputedNode, &mut StickHead), Changed<ComputedNode>>) {
    for (computed, mut head) in &mut q_head {
        // Not laid out yet.
        if computed.size().x <= 0.0 {
            continue;
        }
        head.range_radius = computed.size().x * computed.inverse_scale_factor() / 2.0;
    }
}

/// Moves the knob and prints the debug text for every head backed by an `S` source.
pub fn stick_head_system<S: Component + StickInputSource>(
    q_head: Query<(&StickHead, &S)>,
    mut q_knob: Query<&mut Node, Without<StickHead>>,
    mut q_text: Query<&mut Text>,
) {
    for (head, source) in &q_head {
        let input = source.stick_input();
        let Some(offset) = head.offset(input) else { continue; };

        if head.shows_stick_head
            && let Some(knob) = head.knob
            && let Ok(mut node) = q_knob.get_mut(knob)
        {
            node.left = Val::Px(offset.x);
            node.top = Val::Px(-offset.y);
        }

        if head.shows_debug_text
            && let Some(text_entity) = head.debug_text
            && let Ok(mut text) = q_text.get_mut(text_entity)
        {
            let label = debug_label(input);
            if text.0 != label {
                text.0 = label;
            }
        }
    }
}

/// Fades the region and its knob between the idle and active alpha.
fn stick_tint_system(
    style: Res<StickStyle>,
    q_stick: Query<(Entity, &VirtualStick, Option<&StickHead>)>,
    mut q_color: Query<&mut BackgroundColor>,
) {
    for (region, stick, head) in &q_stick {
        let target_alpha = style.alpha(stick.is_tracking());

        if let Ok(mut c) = q_color.get_mut(region) { c.0.set_alpha(target_alpha); }
        if let Some(knob) = head.and_then(|head| head.knob) {
            if let Ok(mut c) = q_color.get_mut(knob) { c.0.set_alpha(target_alpha); }
        }
    }
}
