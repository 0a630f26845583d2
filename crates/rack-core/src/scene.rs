//! Scene description handed to the renderer.
//!
//! [`build_draw_list`] turns the room into draw items once at setup;
//! [`plan_frame`] orders and packs them each frame for the current eye.

use crate::constants::{
    COMPONENT_HEX, FLOOR_HEX, FLOOR_Y, RACK_BODY_OPACITY, TOWER_HEX, TOWER_OPACITY,
};
use crate::geometry::Aabb;
use crate::room::{RackId, ServerRoom};
use glam::{Mat4, Vec3};
use std::ops::Range;

/// Meshes the renderer uploads once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Cube,
    CubeEdges,
    FloorGrid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shading {
    Phong,
    Unlit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Linear RGB.
    pub color: [f32; 3],
    pub opacity: f32,
    pub transparent: bool,
    pub shading: Shading,
}

impl Material {
    pub fn phong(hex: u32) -> Self {
        Self {
            color: hex_to_linear(hex),
            opacity: 1.0,
            transparent: false,
            shading: Shading::Phong,
        }
    }

    pub fn line(hex: u32) -> Self {
        Self {
            shading: Shading::Unlit,
            ..Self::phong(hex)
        }
    }

    pub fn translucent(hex: u32, opacity: f32) -> Self {
        Self {
            opacity,
            transparent: true,
            ..Self::phong(hex)
        }
    }

    /// Fully transparent materials draw nothing.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.transparent || self.opacity > 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawItem {
    pub primitive: Primitive,
    pub model: Mat4,
    pub material: Material,
    /// Rack this item belongs to, for anything that is part of a rack.
    pub rack: Option<RackId>,
}

impl DrawItem {
    fn boxed(aabb: &Aabb, primitive: Primitive, material: Material, rack: Option<RackId>) -> Self {
        Self {
            primitive,
            model: Mat4::from_scale_rotation_translation(
                aabb.size(),
                glam::Quat::IDENTITY,
                aabb.center(),
            ),
            material,
            rack,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.model.w_axis.truncate()
    }
}

/// Everything drawn in the room: floor, towers, and each rack's body, border
/// and components.
pub fn build_draw_list(room: &ServerRoom) -> Vec<DrawItem> {
    let mut items = Vec::with_capacity(1 + room.towers().len() + room.racks().len() * 5);
    items.push(DrawItem {
        primitive: Primitive::FloorGrid,
        model: Mat4::from_translation(Vec3::Y * FLOOR_Y),
        material: Material::phong(FLOOR_HEX),
        rack: None,
    });
    for tower in room.towers() {
        items.push(DrawItem::boxed(
            &tower.body,
            Primitive::Cube,
            Material::translucent(TOWER_HEX, TOWER_OPACITY),
            None,
        ));
    }
    for rack in room.racks() {
        let id = Some(rack.id);
        items.push(DrawItem::boxed(
            &rack.body,
            Primitive::Cube,
            Material::translucent(0xffffff, RACK_BODY_OPACITY),
            id,
        ));
        items.push(DrawItem::boxed(
            &rack.body,
            Primitive::CubeEdges,
            Material::line(rack.border_hex),
            id,
        ));
        for c in &rack.components {
            items.push(DrawItem::boxed(c, Primitive::Cube, Material::phong(COMPONENT_HEX), id));
        }
    }
    items
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineKind {
    Solid,
    Translucent,
    LitLines,
    UnlitLines,
}

impl PipelineKind {
    pub fn for_item(item: &DrawItem) -> Self {
        match (item.primitive, item.material.shading) {
            (Primitive::Cube, _) if item.material.transparent => Self::Translucent,
            (Primitive::Cube, _) => Self::Solid,
            (_, Shading::Phong) => Self::LitLines,
            (_, Shading::Unlit) => Self::UnlitLines,
        }
    }

    fn pass_order(self) -> u8 {
        match self {
            Self::Solid => 0,
            Self::LitLines => 1,
            Self::UnlitLines => 2,
            Self::Translucent => 3,
        }
    }
}

/// Per-instance data as laid out in the instance vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl InstanceRaw {
    pub fn from_item(item: &DrawItem) -> Self {
        let [r, g, b] = item.material.color;
        Self {
            model: item.model.to_cols_array_2d(),
            color: [r, g, b, item.material.opacity],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Batch {
    pub pipeline: PipelineKind,
    pub primitive: Primitive,
    pub instances: Range<u32>,
}

#[derive(Clone, Debug, Default)]
pub struct FramePlan {
    pub instances: Vec<InstanceRaw>,
    pub batches: Vec<Batch>,
}

/// Order visible items for drawing from `eye` and pack them into batches.
///
/// Opaque solids come first, then lines, then translucent solids sorted back
/// to front. Consecutive items sharing a pipeline and mesh form one batch.
pub fn plan_frame(items: &[DrawItem], eye: Vec3) -> FramePlan {
    let mut order: Vec<(&DrawItem, PipelineKind, f32)> = items
        .iter()
        .filter(|it| it.material.is_visible())
        .map(|it| (it, PipelineKind::for_item(it), it.center().distance_squared(eye)))
        .collect();
    order.sort_by(|a, b| {
        a.1.pass_order().cmp(&b.1.pass_order()).then_with(|| {
            if a.1 == PipelineKind::Translucent {
                b.2.total_cmp(&a.2)
            } else {
                (a.0.primitive as u8).cmp(&(b.0.primitive as u8))
            }
        })
    });

    let mut plan = FramePlan {
        instances: Vec::with_capacity(order.len()),
        batches: Vec::new(),
    };
    for (item, pipeline, _) in order {
        let index = plan.instances.len() as u32;
        plan.instances.push(InstanceRaw::from_item(item));
        match plan.batches.last_mut() {
            Some(b) if b.pipeline == pipeline && b.primitive == item.primitive => {
                b.instances.end = index + 1;
            }
            _ => plan.batches.push(Batch {
                pipeline,
                primitive: item.primitive,
                instances: index..index + 1,
            }),
        }
    }
    plan
}

/// Convert an sRGB hex color to linear RGB.
pub fn hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoomConfig;
    use crate::constants::BORDER_COLORS_HEX;

    fn items() -> (ServerRoom, Vec<DrawItem>) {
        let room = ServerRoom::new(&RoomConfig::default().with_seed(2)).unwrap();
        let items = build_draw_list(&room);
        (room, items)
    }

    #[test]
    fn draw_list_covers_floor_towers_and_racks() {
        let (_, items) = items();
        // floor + 3 towers + 12 racks * (body + border + 3 components)
        assert_eq!(items.len(), 1 + 3 + 12 * 5);
        assert_eq!(
            items.iter().filter(|i| i.primitive == Primitive::CubeEdges).count(),
            12
        );
    }

    #[test]
    fn rack_bodies_are_invisible_and_borders_opaque() {
        let (_, items) = items();
        for it in items.iter().filter(|i| i.rack.is_some()) {
            match it.primitive {
                Primitive::Cube if it.material.transparent => {
                    assert!(it.material.opacity.abs() < 1e-6);
                    assert!(!it.material.is_visible());
                }
                Primitive::CubeEdges => {
                    assert_eq!(it.material.opacity, 1.0);
                    assert_eq!(it.material.shading, Shading::Unlit);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn each_border_takes_its_slot_color() {
        let (room, items) = items();
        for rack in room.racks() {
            let border = items
                .iter()
                .find(|i| i.rack == Some(rack.id) && i.primitive == Primitive::CubeEdges)
                .unwrap();
            assert_eq!(
                border.material.color,
                hex_to_linear(BORDER_COLORS_HEX[rack.slot])
            );
        }
    }

    #[test]
    fn plan_orders_passes_and_sorts_translucent_back_to_front() {
        let (_, items) = items();
        let eye = Vec3::new(10.0, 5.0, 10.0);
        let plan = plan_frame(&items, eye);
        // rack bodies are skipped
        assert_eq!(plan.instances.len(), items.len() - 12);
        let kinds: Vec<PipelineKind> = plan.batches.iter().map(|b| b.pipeline).collect();
        assert_eq!(
            kinds,
            vec![
                PipelineKind::Solid,
                PipelineKind::LitLines,
                PipelineKind::UnlitLines,
                PipelineKind::Translucent
            ]
        );
        let last = plan.batches.last().unwrap();
        assert_eq!(last.instances.len(), 3);
        let dists: Vec<f32> = last
            .instances
            .clone()
            .map(|i| {
                let m = plan.instances[i as usize].model;
                Vec3::new(m[3][0], m[3][1], m[3][2]).distance(eye)
            })
            .collect();
        assert!(dists.windows(2).all(|w| w[0] >= w[1]));
        // batches tile the instance buffer
        let mut next = 0;
        for b in &plan.batches {
            assert_eq!(b.instances.start, next);
            next = b.instances.end;
        }
        assert_eq!(next as usize, plan.instances.len());
    }

    #[test]
    fn hex_conversion_endpoints() {
        assert_eq!(hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
        let white = hex_to_linear(0xffffff);
        assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));
        let red = hex_to_linear(0xff0000);
        assert!((red[0] - 1.0).abs() < 1e-6 && red[1] == 0.0 && red[2] == 0.0);
        // mid grey is darker in linear space
        assert!(hex_to_linear(0x808080)[0] < 0.5);
    }
}
