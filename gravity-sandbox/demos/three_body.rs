// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Headless three-body sandbox session
//!
//! Drives the sandbox the way an interactive front end would: a star is
//! placed with a press-hold-release gesture, a planet is launched relative
//! to it with a drag, a second star is thrown in, and the simulation runs
//! for a number of frames while momentum and energy drift are logged.
//!
//! # Running
//!
//! ```bash
//! # Default settings, 5,000 frames
//! RUST_LOG=info cargo run --example three_body --release
//!
//! # Larger timestep and a custom configuration file
//! cargo run --example three_body --release -- --timestep 5000 --config sandbox.toml
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use glam::DVec2;
use gravity_sandbox::integration::{center_of_mass, total_energy, total_momentum};
use gravity_sandbox::{BodyKind, Sandbox, SandboxConfig};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(about = "Run a scripted three-body sandbox session without a window")]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 5_000)]
    frames: usize,

    /// Timestep in seconds (clamped into the configured range)
    #[arg(long)]
    timestep: Option<f64>,

    /// Frames between diagnostic log lines
    #[arg(long, default_value_t = 500)]
    report_every: usize,

    /// TOML file overriding any part of the sandbox configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<SandboxConfig> {
    let Some(path) = path else {
        return Ok(SandboxConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}

/// Place a body through the same gesture a mouse would produce
fn place(sandbox: &mut Sandbox, kind: BodyKind, press: DVec2, release: DVec2, held: Duration) -> Result<()> {
    sandbox.set_mode(kind);
    sandbox.press(press);
    sandbox.hold_for(held);
    if let Some(preview) = sandbox.preview() {
        log::info!(
            "placing {} of {:.3e} kg at {} m, relative velocity {} m/s",
            preview.kind,
            preview.mass,
            preview.world_position,
            preview.relative_velocity
        );
    }
    sandbox.release(release)?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    let mut sandbox = Sandbox::with_config(config)?;

    if let Some(timestep) = args.timestep {
        let applied = sandbox.set_timestep(timestep)?;
        log::info!("timestep set to {} s", applied);
    }

    let center = sandbox.camera().screen_center();

    // Central star, held for three seconds
    place(&mut sandbox, BodyKind::Star, center, center, Duration::from_secs(3))?;
    // Planet 150 px out, launched 30 px sideways relative to the focused star
    place(
        &mut sandbox,
        BodyKind::Planet,
        center + DVec2::new(150.0, 0.0),
        center + DVec2::new(150.0, -30.0),
        Duration::from_secs(12),
    )?;
    // Second star thrown in from the far side
    sandbox.unfocus();
    place(
        &mut sandbox,
        BodyKind::Star,
        center + DVec2::new(-300.0, 200.0),
        center + DVec2::new(-290.0, 185.0),
        Duration::from_millis(500),
    )?;

    sandbox.set_mode(BodyKind::Star);
    sandbox.focus_next();
    sandbox.set_running(true);

    let initial_energy = total_energy(sandbox.world());
    let initial_momentum = total_momentum(sandbox.world());
    log::info!(
        "{} bodies, dt = {} s, E0 = {:.6e} J, p0 = {} kg⋅m/s",
        sandbox.world().len(),
        sandbox.world().timestep(),
        initial_energy,
        initial_momentum
    );

    for frame in 1..=args.frames {
        sandbox.frame();

        if frame % args.report_every.max(1) == 0 {
            let world = sandbox.world();
            let energy = total_energy(world);
            let drift = ((energy - initial_energy) / initial_energy).abs();
            let momentum_error = (total_momentum(world) - initial_momentum).length()
                / initial_momentum.length().max(f64::MIN_POSITIVE);
            log::info!(
                "frame {:>6}: energy drift {:.3e}, momentum error {:.3e}, center of mass {}",
                frame,
                drift,
                momentum_error,
                center_of_mass(world).unwrap_or(DVec2::ZERO)
            );
        }
    }

    for (handle, body) in sandbox.world().iter() {
        log::info!(
            "{} {}: position {} m, velocity {} m/s, mass {:.3e} kg",
            body.kind(),
            handle,
            body.position(),
            body.velocity(),
            body.mass()
        );
    }

    Ok(())
}
