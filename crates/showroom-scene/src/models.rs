//! Car models.
//!
//! The showroom never looks inside a [`CarModel`] beyond its two paint
//! materials; parts exist for the renderer. Models are built once per car
//! by a [`ModelFactory`] and cloned whenever a car is put on display.

use showroom_config::CarKind;

use crate::paint::PaintColor;

/// Primitive geometry of a part, in model units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box {
        size: [f32; 3],
    },
    /// Wheel: a cylinder lying on its side.
    Cylinder {
        radius: f32,
        width: f32,
    },
    /// Round light lens facing outward.
    Disc {
        radius: f32,
    },
}

/// Physically based surface description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: PaintColor,
    pub metalness: f32,
    pub roughness: f32,
    /// Unlit (lights).
    pub emissive: bool,
    pub opacity: f32,
}

impl Material {
    pub const fn standard(color: PaintColor, metalness: f32, roughness: f32) -> Self {
        Self {
            color,
            metalness,
            roughness,
            emissive: false,
            opacity: 1.0,
        }
    }

    pub const fn emissive(color: PaintColor) -> Self {
        Self {
            color,
            metalness: 0.0,
            roughness: 1.0,
            emissive: true,
            opacity: 1.0,
        }
    }

    pub const fn glass(color: PaintColor) -> Self {
        Self {
            color,
            metalness: 0.9,
            roughness: 0.1,
            emissive: false,
            opacity: 0.7,
        }
    }
}

/// Where a part takes its material from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialSlot {
    /// The repaintable body material.
    Body,
    /// The repaintable roof/cabin material.
    Top,
    Fixed(Material),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: &'static str,
    pub shape: Shape,
    pub position: [f32; 3],
    pub slot: MaterialSlot,
}

/// A built car: parts plus its two paint materials.
#[derive(Debug, Clone, PartialEq)]
pub struct CarModel {
    pub kind: CarKind,
    pub parts: Vec<Part>,
    pub body: Material,
    pub top: Material,
}

impl CarModel {
    /// Set body and top color; finish is kept.
    pub fn repaint(&mut self, color: PaintColor) {
        self.body.color = color;
        self.top.color = color;
    }

    pub fn paint(&self) -> PaintColor {
        self.body.color
    }

    /// Material a part renders with.
    pub fn material(&self, part: &Part) -> Material {
        match part.slot {
            MaterialSlot::Body => self.body,
            MaterialSlot::Top => self.top,
            MaterialSlot::Fixed(material) => material,
        }
    }

    pub fn part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.name == name)
    }

    pub fn parts_named<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Part> + 'a {
        self.parts.iter().filter(move |p| p.name.starts_with(prefix))
    }
}

/// Builds the model for a car.
pub trait ModelFactory {
    fn build(&mut self, kind: CarKind) -> CarModel;
}

/// Builds the three showroom cars from primitives.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProceduralModelFactory;

const TIRE: Material = Material::standard(PaintColor::from_rgb(0x11, 0x11, 0x11), 0.0, 0.9);
const WINDOW: Material = Material::glass(PaintColor::from_rgb(0x11, 0x11, 0x11));
const HEADLIGHT: Material = Material::emissive(PaintColor::from_rgb(0xff, 0xff, 0xcc));
const TAILLIGHT: Material = Material::emissive(PaintColor::from_rgb(0xff, 0x00, 0x00));
const CARBON: Material = Material::standard(PaintColor::from_rgb(0x22, 0x22, 0x22), 0.5, 0.5);

const fn exhaust(shade: u8) -> Material {
    Material::standard(PaintColor::from_rgb(shade, shade, shade), 0.8, 0.2)
}

fn part(name: &'static str, shape: Shape, position: [f32; 3], slot: MaterialSlot) -> Part {
    Part {
        name,
        shape,
        position,
        slot,
    }
}

fn block(size: [f32; 3]) -> Shape {
    Shape::Box { size }
}

/// Four wheels at `(±x, y, ±z)`, front at negative x.
fn wheels(parts: &mut Vec<Part>, front: (f32, f32), rear: (f32, f32), x: f32, z: f32, width: f32) {
    let (front_radius, front_y) = front;
    let (rear_radius, rear_y) = rear;
    for (name, position, radius) in [
        ("wheel_front_left", [-x, front_y, z], front_radius),
        ("wheel_front_right", [-x, front_y, -z], front_radius),
        ("wheel_rear_left", [x, rear_y, z], rear_radius),
        ("wheel_rear_right", [x, rear_y, -z], rear_radius),
    ] {
        parts.push(part(
            name,
            Shape::Cylinder { radius, width },
            position,
            MaterialSlot::Fixed(TIRE),
        ));
    }
}

impl ProceduralModelFactory {
    fn muscle() -> CarModel {
        let paint = Material::standard(PaintColor::from_rgb(0xff, 0x00, 0x00), 0.7, 0.2);
        let mut parts = vec![
            part("body", block([4.0, 1.5, 2.0]), [0.0, 0.75, 0.0], MaterialSlot::Body),
            part("top", block([2.5, 0.8, 1.8]), [0.0, 1.9, 0.0], MaterialSlot::Top),
            part(
                "windshield",
                block([0.1, 0.7, 1.7]),
                [-1.2, 1.9, 0.0],
                MaterialSlot::Fixed(WINDOW),
            ),
        ];
        wheels(&mut parts, (0.4, 0.4), (0.4, 0.4), 1.7, 1.0, 0.3);
        for z in [0.7, -0.7] {
            parts.push(part(
                "headlight",
                Shape::Disc { radius: 0.2 },
                [-2.0, 0.8, z],
                MaterialSlot::Fixed(HEADLIGHT),
            ));
            parts.push(part(
                "taillight",
                Shape::Disc { radius: 0.2 },
                [2.0, 0.8, z],
                MaterialSlot::Fixed(TAILLIGHT),
            ));
            parts.push(part(
                "exhaust",
                Shape::Cylinder {
                    radius: 0.1,
                    width: 0.3,
                },
                [2.2, 0.3, z * 5.0 / 7.0],
                MaterialSlot::Fixed(exhaust(0x77)),
            ));
        }
        CarModel {
            kind: CarKind::Muscle,
            parts,
            body: paint,
            top: paint,
        }
    }

    fn sport() -> CarModel {
        let paint = Material::standard(PaintColor::from_rgb(0x00, 0xff, 0x00), 0.8, 0.1);
        let mut parts = vec![
            part("body", block([4.2, 1.0, 2.0]), [0.0, 0.5, 0.0], MaterialSlot::Body),
            part("top", block([3.0, 0.7, 1.8]), [0.0, 1.3, 0.0], MaterialSlot::Top),
            part(
                "spoiler_front",
                block([0.2, 0.1, 2.0]),
                [-2.2, 0.2, 0.0],
                MaterialSlot::Fixed(CARBON),
            ),
            part(
                "spoiler_stand",
                block([0.1, 0.5, 0.1]),
                [1.9, 1.0, 0.0],
                MaterialSlot::Fixed(CARBON),
            ),
            part(
                "spoiler_rear",
                block([0.5, 0.05, 1.8]),
                [2.1, 1.3, 0.0],
                MaterialSlot::Fixed(CARBON),
            ),
            part(
                "taillight",
                block([0.05, 0.1, 1.6]),
                [2.1, 0.7, 0.0],
                MaterialSlot::Fixed(TAILLIGHT),
            ),
        ];
        wheels(&mut parts, (0.4, 0.4), (0.4, 0.4), 1.5, 1.0, 0.25);
        for z in [0.7, -0.7] {
            parts.push(part(
                "headlight",
                block([0.05, 0.15, 0.4]),
                [-2.1, 0.6, z],
                MaterialSlot::Fixed(HEADLIGHT),
            ));
        }
        for z in [0.3, -0.3] {
            parts.push(part(
                "exhaust",
                Shape::Cylinder {
                    radius: 0.08,
                    width: 0.3,
                },
                [2.2, 0.3, z],
                MaterialSlot::Fixed(exhaust(0xaa)),
            ));
        }
        CarModel {
            kind: CarKind::Sport,
            parts,
            body: paint,
            top: paint,
        }
    }

    fn supercar() -> CarModel {
        let paint = Material::standard(PaintColor::from_rgb(0xff, 0x00, 0xff), 1.0, 0.0);
        let led = Material::emissive(PaintColor::from_rgb(0xcc, 0xff, 0xff));
        let mut parts = vec![
            part("body", block([4.5, 0.8, 2.2]), [0.0, 0.4, 0.0], MaterialSlot::Body),
            part("top", block([2.5, 0.4, 1.8]), [0.0, 0.9, 0.0], MaterialSlot::Top),
            part(
                "hood_scoop",
                block([0.8, 0.1, 0.6]),
                [-0.5, 0.85, 0.0],
                MaterialSlot::Fixed(Material::standard(PaintColor::from_rgb(0, 0, 0), 0.5, 0.5)),
            ),
            part(
                "splitter",
                block([0.3, 0.05, 2.4]),
                [-2.2, 0.15, 0.0],
                MaterialSlot::Fixed(CARBON),
            ),
            part(
                "wing_stand",
                block([0.1, 0.5, 0.1]),
                [1.8, 1.0, 0.8],
                MaterialSlot::Fixed(CARBON),
            ),
            part(
                "wing_stand",
                block([0.1, 0.5, 0.1]),
                [1.8, 1.0, -0.8],
                MaterialSlot::Fixed(CARBON),
            ),
            part(
                "wing",
                block([0.6, 0.05, 2.2]),
                [1.8, 1.4, 0.0],
                MaterialSlot::Fixed(CARBON),
            ),
            part(
                "taillight",
                block([0.05, 0.05, 2.0]),
                [2.25, 0.6, 0.0],
                MaterialSlot::Fixed(TAILLIGHT),
            ),
        ];
        // Staggered setup: bigger rear wheels.
        wheels(&mut parts, (0.4, 0.4), (0.45, 0.45), 1.5, 1.1, 0.3);
        for z in [0.5, -0.5] {
            parts.push(part(
                "headlight",
                block([0.05, 0.05, 0.5]),
                [-2.25, 0.5, z],
                MaterialSlot::Fixed(led),
            ));
        }
        for z in [0.6, 0.4, -0.4, -0.6] {
            parts.push(part(
                "exhaust",
                Shape::Cylinder {
                    radius: 0.06,
                    width: 0.2,
                },
                [2.2, 0.25, z],
                MaterialSlot::Fixed(exhaust(0xcc)),
            ));
        }
        CarModel {
            kind: CarKind::Super,
            parts,
            body: paint,
            top: paint,
        }
    }
}

impl ModelFactory for ProceduralModelFactory {
    fn build(&mut self, kind: CarKind) -> CarModel {
        log::debug!("building procedural model for {kind}");
        match kind {
            CarKind::Muscle => Self::muscle(),
            CarKind::Sport => Self::sport(),
            CarKind::Super => Self::supercar(),
        }
    }
}
