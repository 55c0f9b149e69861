use panogaze::config;
use panogaze::directory;
use panogaze::port::{
    Button, ButtonTracker, DisplayError, LogNotices, Panorama, PanoramaSink, Projection,
    RenderOptions,
};
use panogaze::viewer::{Viewer, ViewerEvent, ViewerHandle};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Headless sink that reports displayed panoramas on stdout.
struct ConsoleSink;

impl PanoramaSink for ConsoleSink {
    fn display(&self, panorama: Panorama, options: RenderOptions) -> Result<(), DisplayError> {
        println!(
            "Displaying {}x{} panorama ({})",
            panorama.width(),
            panorama.height(),
            options.projection
        );
        Ok(())
    }

    fn pause_rendering(&self) {
        println!("Rendering paused");
    }

    fn resume_rendering(&self) {
        println!("Rendering resumed");
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = pico_args::Arguments::from_env();
    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config-dir").unwrap();
    let mono = args.contains("--mono");
    let picture_dir = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    let (mut config, warning) = config::load_with_override(config_dir);
    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
    if let Some(dir) = picture_dir {
        config.browse.picture_dir = Some(dir);
    }
    if mono {
        config.display.projection = Some(Projection::Mono);
    }

    let browse_root = config.picture_dir();
    let (viewer, handle) = Viewer::new(&config, ConsoleSink, LogNotices);
    let running = tokio::spawn(viewer.run());

    handle.send(ViewerEvent::Reload);

    println!("Browsing {}", browse_root.display());
    println!("Commands: n(ext), p(revious), r(eload), d <dir>, ls, pause, resume, q(uit)");

    let driver = tokio::task::spawn_blocking(move || drive_from_stdin(&handle, &browse_root));
    driver.await.expect("console driver panicked");
    running.await.expect("viewer task panicked");
}

/// Reads one command per stdin line until `q` or EOF, then shuts down.
fn drive_from_stdin(handle: &ViewerHandle, browse_root: &Path) {
    let stdin = std::io::stdin();
    let mut tracker = ButtonTracker::new();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        let mut parts = line.splitn(2, ' ');

        let alive = match parts.next().unwrap_or("") {
            "n" => press(&mut tracker, handle, Button::Primary),
            "p" => press(&mut tracker, handle, Button::Secondary),
            "r" => handle.send(ViewerEvent::Reload),
            "d" => match parts.next() {
                Some(dir) => handle.send(ViewerEvent::SelectDirectory(PathBuf::from(dir))),
                None => {
                    eprintln!("Usage: d <directory>");
                    true
                }
            },
            "ls" => {
                for (label, path) in directory::directory_tree(browse_root, "[Panogaze]") {
                    println!("{label}\t{}", path.display());
                }
                true
            }
            "pause" => handle.send(ViewerEvent::Pause),
            "resume" => handle.send(ViewerEvent::Resume),
            "q" => break,
            "" => true,
            other => {
                eprintln!("Unknown command: {other}");
                true
            }
        };

        if !alive {
            return;
        }
    }

    handle.send(ViewerEvent::Shutdown);
}

/// Runs one press-release cycle through the edge tracker, the way a polling
/// controller adapter would.
fn press(tracker: &mut ButtonTracker, handle: &ViewerHandle, button: Button) -> bool {
    let mut alive = true;
    if tracker.track(button, true) {
        alive = handle.send(ViewerEvent::Pressed(button));
    }
    tracker.track(button, false);
    alive
}
