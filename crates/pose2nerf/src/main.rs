use argh::FromArgs;
use std::path::PathBuf;

use nerf_transforms::{checkpoint, intrinsics, linalg, transforms};

#[derive(FromArgs)]
/// Convert a predicted-pose checkpoint into a NeRF-style transforms.json
struct Args {
    /// path to the checkpoint file, or a result directory containing ep00_init.pth
    #[argh(option, short = 'r')]
    result_path: PathBuf,

    /// path to the camera intrinsics sidecar (COLMAP cameras.txt or a .json file)
    #[argh(option, short = 'c')]
    cameras_path: PathBuf,

    /// path to write the transforms.json output
    #[argh(option, short = 'o')]
    output_path: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // load the camera intrinsics
    let is_json = args.cameras_path.extension().is_some_and(|ext| ext == "json");
    let intrinsics = if is_json {
        intrinsics::read_cameras_json(&args.cameras_path)?
    } else {
        intrinsics::read_cameras_txt(&args.cameras_path)?
    };

    // load the predicted poses and flip their convention
    let poses = checkpoint::read_pose_checkpoint(&args.result_path)?;
    log::info!("loaded {} predicted poses", poses.len());

    let poses = poses
        .iter()
        .map(linalg::invert_mat4)
        .collect::<Result<Vec<_>, _>>()?;

    // assemble and write the transforms document
    let document = transforms::build_transforms(intrinsics, &poses);
    transforms::write_transforms_json(&document, &args.output_path)?;

    println!("Transforms saved to {}", args.output_path.display());

    Ok(())
}
