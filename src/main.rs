use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command};

use uvsphere::default_model::{BufferModel, SphereModel};
use uvsphere::error::SphereError;
use uvsphere::export::save_obj;
use uvsphere::geometry::params::SphereParams;
use uvsphere::geometry::sphere::{sphere_gen, DEFAULT_LATITUDES, DEFAULT_LONGITUDES};
use uvsphere::sphere_mesh::SphereMesh;

/******************************************************************************/

const DEFAULT_TARGET_VERTICES: u32 = 400;
const DEFAULT_RADIUS: f32 = 1.0;

struct AppConfig {
    vertices: u32,
    radius: f32,
    sectors: Option<u32>,
    stacks: Option<u32>,
    static_gen: bool,
    resize: Option<f32>,
    obj: Option<PathBuf>,
    debug: bool,
}

fn cli() -> Command {
    let args = [
        Arg::new("vertices")
            .long("vertices")
            .action(ArgAction::Set)
            .value_name("COUNT")
            .value_parser(clap::value_parser!(u32))
            .help("Target vertex count for the parameter search"),
        Arg::new("radius")
            .long("radius")
            .action(ArgAction::Set)
            .value_name("RADIUS")
            .value_parser(clap::value_parser!(f32))
            .allow_negative_numbers(true)
            .help("Initial sphere radius"),
        Arg::new("sectors")
            .long("sectors")
            .action(ArgAction::Set)
            .value_name("SECTORS")
            .value_parser(clap::value_parser!(u32))
            .requires("stacks")
            .help("Fixed longitude count, skips the parameter search"),
        Arg::new("stacks")
            .long("stacks")
            .action(ArgAction::Set)
            .value_name("STACKS")
            .value_parser(clap::value_parser!(u32))
            .requires("sectors")
            .help("Fixed latitude count, skips the parameter search"),
        Arg::new("static")
            .long("static")
            .action(ArgAction::SetTrue)
            .conflicts_with_all(["vertices", "resize"])
            .help("Use the fixed-topology generator (keeps pole triangles)"),
        Arg::new("resize")
            .long("resize")
            .action(ArgAction::Set)
            .value_name("RADIUS")
            .value_parser(clap::value_parser!(f32))
            .allow_negative_numbers(true)
            .help("Change the radius once after construction"),
        Arg::new("obj")
            .long("obj")
            .action(ArgAction::Set)
            .value_name("PATH")
            .value_parser(clap::value_parser!(PathBuf))
            .help("Write the mesh as Wavefront OBJ"),
        Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help("Enable debug printing"),
    ];
    Command::new("uvsphere")
        .about("UV sphere mesh generator")
        .args(&args)
}

fn get_config() -> AppConfig {
    let matches = cli().get_matches();

    let vertices = matches.get_one("vertices").copied().unwrap_or(DEFAULT_TARGET_VERTICES);
    let radius = matches.get_one("radius").copied().unwrap_or(DEFAULT_RADIUS);
    let sectors = matches.get_one("sectors").copied();
    let stacks = matches.get_one("stacks").copied();
    let static_gen = matches.get_flag("static");
    let resize = matches.get_one("resize").copied();
    let obj = matches.get_one("obj").cloned();
    let debug = matches.get_flag("debug");
    AppConfig{vertices, radius, sectors, stacks, static_gen, resize, obj, debug}
}

fn init_logger(app_config: &AppConfig) {
    let log_level: &str = if app_config.debug {
        "debug"
    } else {
        "info"
    };
    let env = env_logger::Env::default()
        .filter_or("UVSPHERE_LOG_LEVEL", log_level)
        .write_style_or("UVSPHERE_LOG_STYLE", "always");
    env_logger::init_from_env(env);
}

fn fixed_params(app_config: &AppConfig) -> Result<Option<SphereParams>, SphereError> {
    match (app_config.sectors, app_config.stacks) {
        (Some(sectors), Some(stacks)) => SphereParams::new(sectors, stacks).map(Some),
        _ => Ok(None),
    }
}

fn log_summary(params: SphereParams, radius: f32, model: &SphereModel) {
    log::info!("Sphere - sectors={:?}, stacks={:?}, radius={:?}", params.sectors, params.stacks, radius);
    log::info!("Mesh - vertices={:?}, triangles={:?}, vertex_buffer={:?}B, index_buffer={:?}B"
               , model.vertices.len(), model.triangle_num()
               , model.vertex_buffer_size(), model.index_buffer_size());
}

fn run(app_config: &AppConfig) -> Result<(), SphereError> {
    let fixed = fixed_params(app_config)?;

    if app_config.static_gen {
        let params = fixed.unwrap_or(SphereParams{sectors: DEFAULT_LONGITUDES, stacks: DEFAULT_LATITUDES});
        let model = sphere_gen(app_config.radius, params.stacks, params.sectors);
        log_summary(params, app_config.radius, &model);
        if let Some(path) = &app_config.obj {
            save_obj(path, &model)?;
        }
        return Ok(());
    }

    let mut mesh = match fixed {
        Some(params) => SphereMesh::with_params(params, app_config.radius),
        None => SphereMesh::new(app_config.vertices, app_config.radius),
    };
    if let Some(radius) = app_config.resize {
        if !mesh.change_radius(radius) {
            log::debug!("Resize skipped - radius={:?}", mesh.radius());
        }
    }

    log_summary(mesh.params(), mesh.radius(), mesh.model());
    if let Some(path) = &app_config.obj {
        save_obj(path, mesh.model())?;
        log::info!("OBJ saved - {:?}", path);
    }
    Ok(())
}

fn main() -> ExitCode {
    let app_config = get_config();

    init_logger(&app_config);

    match run(&app_config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
