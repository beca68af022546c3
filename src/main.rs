use std::error::Error;
use std::io;

use foliowm::config;
use foliowm::foliowm::FolioWm;
use foliowm::script::ScriptAdapter;
use log::warn;

fn main() -> Result<(), Box<dyn Error>> {
    let _log2 = log2::start();

    let config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, using default config", e);
        config::Config::default()
    });

    let mut wm = FolioWm::new(&config);
    wm.startup(&config.startup);

    let mut source = ScriptAdapter::new(io::stdin().lock());
    wm.run(&mut source)?;

    // final stacking order, bottom first
    for window in wm.desktop().list_open_windows_ordered_by_z_index() {
        println!(
            "{:>3} {:<14} {:>5},{:<5} {}x{}{}{}",
            window.z_index,
            window.id,
            window.position.x,
            window.position.y,
            window.size.width,
            window.size.height,
            if window.is_maximized { " maximized" } else { "" },
            if window.is_active { " *" } else { "" },
        );
    }
    Ok(())
}
