use cmdbar::prelude::*;
use cmdbar::services::SettingsRegistry;
use std::time::Instant;

fn load_config() -> PlacementConfig {
    let registry = match smol::block_on(SettingsRegistry::new()) {
        Ok(registry) => registry,
        Err(e) => {
            log::warn!("Could not load menu settings, using defaults: {}", e);
            SettingsRegistry::with_defaults()
        },
    };

    match registry.placement_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid menu settings, using defaults: {}", e);
            PlacementConfig::default()
        },
    }
}

fn build_bar(config: PlacementConfig) -> (CommandBar, MenuId, MenuId, MenuId) {
    let mut bar = CommandBar::with_config(config);

    let mut file = CommandMenu::new("File").with_content_provider(|popup: &mut PopupMenu| -> anyhow::Result<()> {
        popup.clear();
        popup.add_item(MenuItem::new("New Document").with_shortcut("Ctrl+N"));
        popup.add_item(
            MenuItem::new("Open...")
                .with_shortcut("Ctrl+O")
                .with_action(|| println!("  -> Open... activated")),
        );
        popup.add_separator();
        popup.add_item(MenuItem::new("Quit").with_shortcut("Ctrl+Q"));
        Ok(())
    });
    file.realize(ScreenRect::new(0, 0, 60, 24));

    let mut recent = CommandMenu::new("Open Recent").with_content_provider(|popup: &mut PopupMenu| -> anyhow::Result<()> {
        popup.clear();
        for name in ["document1.txt", "project.rs", "notes.md"] {
            popup.add(name);
        }
        Ok(())
    });
    recent.realize(ScreenRect::new(0, 28, 180, 24));
    let recent = file.popup_mut().add_submenu(recent);

    let mut window = CommandMenu::new("Window")
        .with_horizontal_alignment(HorizontalAlignment::Right)
        .with_content_provider(|popup: &mut PopupMenu| -> anyhow::Result<()> {
            popup.clear();
            popup.add_item(MenuItem::new("Always on Top").with_checked(true));
            popup.add("Minimize");
            Ok(())
        });
    // Last menu on the first monitor, close to its right edge.
    window.realize(ScreenRect::new(1840, 0, 80, 24));

    let file = bar.add_menu(file);
    let window = bar.add_menu(window);
    (bar, file, recent, window)
}

fn report(bar: &mut CommandBar, id: MenuId, screens: &StaticScreens) {
    let label = bar.menu(id).map(|menu| menu.label().to_string()).unwrap_or_default();
    match bar.open_menu(id, screens) {
        Ok(OpenOutcome::Shown { offset, location }) => {
            println!(
                "{:<12} offset ({:>4}, {:>4})  popup at ({:>5}, {:>4})",
                label, offset.x, offset.y, location.x, location.y
            );
        },
        Ok(OpenOutcome::Cancelled) => println!("{:<12} nothing to show", label),
        Err(e) => println!("{:<12} failed: {}", label, e),
    }
}

fn main() {
    env_logger::init();

    println!("Command Bar Demo");
    println!("================");
    println!("Menu settings are read from menu.toml in the cmdbar-0 XDG directories.");
    println!("Set RUST_LOG=debug to see placement decisions.");
    println!();

    let config = load_config().with_hide_policy(HidePolicy::Delayed);
    println!("Root popup offset:    {:?}", config.menu_popup_offset);
    println!("Submenu popup offset: {:?}", config.submenu_popup_offset);
    println!("Hide delay:           {:?}", config.hide_delay());
    println!();

    let screens = StaticScreens::single(ScreenRect::new(0, 0, 1920, 1080)).with_display(
        Display::raster(1, ScreenRect::new(1920, 0, 1280, 1024)),
        Insets::new(0, 0, 40, 0),
    );
    let (mut bar, file, recent, window) = build_bar(config);

    report(&mut bar, file, &screens);
    report(&mut bar, recent, &screens);
    report(&mut bar, window, &screens);

    if let Some(item) = bar.menu(file).and_then(|menu| menu.popup().items().nth(1)) {
        item.activate();
    }

    println!();
    println!("Deselecting 'Open Recent'...");
    match bar.deselect_menu(recent, HideOrigin::Deselected, Instant::now()) {
        Ok(HideOutcome::Deferred) => {
            if let Some(timer) = bar.hide_timer() {
                let fired_at = smol::block_on(timer);
                if let Some(hidden) = bar.tick(fired_at) {
                    println!("Pending hide fired for {:?}", hidden);
                }
            }
        },
        Ok(HideOutcome::Hidden) => println!("Hidden immediately"),
        Err(e) => println!("Failed: {}", e),
    }

    bar.clear_selected_path();
    let open = bar.menus().iter().filter(|menu| menu.is_popup_visible()).count();
    println!("Open popups after clearing the path: {}", open);
}
