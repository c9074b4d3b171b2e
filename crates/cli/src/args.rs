use clap::{Parser, Subcommand, ValueEnum};
use grasplab_mesh::{shapes, CenterMode, Mesh, NormalPolicy};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Unit cube spanning [0, 1] on every axis.
    Cube,
    /// Regular tetrahedron centred on the origin.
    Tetrahedron,
}

impl Shape {
    pub fn build(self) -> Mesh {
        match self {
            Shape::Cube => shapes::unit_cube(),
            Shape::Tetrahedron => shapes::tetrahedron(),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Center {
    /// Move the mean vertex position to the origin.
    Avg,
    /// Move the bounding box center to the origin.
    Bb,
}

impl From<Center> for CenterMode {
    fn from(c: Center) -> Self {
        match c {
            Center::Avg => CenterMode::Average,
            Center::Bb => CenterMode::BoundingBox,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Normals {
    /// Normal of the first triangle using the vertex.
    First,
    /// Area-weighted average over all incident triangles.
    Area,
}

impl From<Normals> for NormalPolicy {
    fn from(n: Normals) -> Self {
        match n {
            Normals::First => NormalPolicy::FirstIncident,
            Normals::Area => NormalPolicy::AreaWeighted,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[arg(short, long, value_enum, default_value_t = Shape::Cube)]
    pub shape: Shape,

    /// Re-center the vertices before anything is computed.
    #[arg(short, long, value_enum)]
    pub center: Option<Center>,

    /// Uniform scale factor, applied after centering.
    #[arg(long, allow_negative_numbers = true)]
    pub scale: Option<f32>,

    /// How vertex normals are computed.
    #[arg(short, long, value_enum, default_value_t = Normals::First)]
    pub normals: Normals,
}

#[derive(clap::Args, Debug)]
pub struct HandPoseArgs {
    #[arg(short, long, value_enum, default_value_t = Shape::Cube)]
    pub shape: Shape,

    /// Vertex index of the first contact.
    #[arg(long)]
    pub contact1: usize,

    /// Vertex index of the second contact.
    #[arg(long)]
    pub contact2: usize,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print counts, triangle centers and normals of a mesh.
    Inspect(InspectArgs),
    /// Convert two mesh vertices into a gripper pose.
    HandPose(HandPoseArgs),
}
