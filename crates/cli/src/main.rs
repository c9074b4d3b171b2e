use clap::Parser;
use grasplab_mesh::Vector3;

mod args;
mod hand_pose;
mod inspect;

use args::{Args, Commands};

pub(crate) fn format_vector(v: &Vector3) -> String {
    format!("[{:.4}, {:.4}, {:.4}]", v.x, v.y, v.z)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut out = std::io::stdout().lock();
    match args.command {
        Commands::Inspect(args) => inspect::inspect_command(args, &mut out),
        Commands::HandPose(args) => hand_pose::hand_pose_command(args, &mut out),
    }
}
