use rand::Rng;
use sdl2::image::InitFlag;
use sdl2::rect::Rect;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod assets;
mod audio;
mod collision;
mod combat;
mod config;
mod drone;
mod fish_reward;
mod frame_limiter;
mod game;
mod gui;
mod input_system;
mod platform;
mod player;
mod render;
mod save;
mod text;
mod ui;

use assets::{Assets, ImageId};
use audio::Audio;
use config::{CONFIG_PATH, GameConfig};
use frame_limiter::FrameLimiter;
use game::{EntitySizes, SCREEN_HEIGHT, SCREEN_WIDTH, Session, SessionOutcome};
use gui::{MainMenu, MainMenuOption};
use input_system::{FrameInput, GameAction, InputContext, InputSystem};
use render::{Renderer, SdlRenderer};
use save::SaveManager;

/// Top-level screen
enum AppState {
    MainMenu(MainMenu),
    Playing(Box<Session>),
    Exit,
}

impl AppState {
    fn input_context(&self) -> InputContext {
        match self {
            AppState::MainMenu(_) | AppState::Exit => InputContext::MainMenu,
            AppState::Playing(session) => session.input_context(),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Main menu showing the record from the current save, if readable
fn main_menu(save_manager: &SaveManager) -> AppState {
    let record = save_manager.load_game().ok();
    AppState::MainMenu(MainMenu::new(record.as_ref()))
}

fn main_menu_action(
    menu: &MainMenu,
    action: GameAction,
    save_manager: &SaveManager,
    sizes: EntitySizes,
    rng: &mut impl Rng,
) -> Option<AppState> {
    match action {
        GameAction::Quit => Some(AppState::Exit),
        GameAction::LeftClick(x, y) => match menu.handle_click((x, y))? {
            MainMenuOption::Start => {
                let record = save_manager.load_or_default();
                Some(AppState::Playing(Box::new(Session::new(&record, sizes, rng))))
            }
            MainMenuOption::Exit => Some(AppState::Exit),
        },
        _ => None,
    }
}

/// Saves on every way out of a session, then picks the next screen
fn finish_session(session: &Session, outcome: SessionOutcome, save_manager: &SaveManager) -> Option<AppState> {
    if !outcome.ends_session() {
        return None;
    }

    save_manager.save_or_warn(&session.snapshot());
    if outcome == SessionOutcome::Quit {
        Some(AppState::Exit)
    } else {
        Some(main_menu(save_manager))
    }
}

/// Applies one translated action to whichever screen is active
fn apply_action(
    state: &mut AppState,
    action: GameAction,
    save_manager: &SaveManager,
    sizes: EntitySizes,
    rng: &mut impl Rng,
    audio: &mut dyn Audio,
) -> Option<AppState> {
    match state {
        AppState::MainMenu(menu) => main_menu_action(menu, action, save_manager, sizes, rng),
        AppState::Playing(session) => {
            let outcome = session.handle_action(action, rng, audio);
            finish_session(session, outcome, save_manager)
        }
        AppState::Exit => None,
    }
}

/// Per-frame work after the events: hover and the session tick
fn tick_state(
    state: &mut AppState,
    held: &FrameInput,
    save_manager: &SaveManager,
    rng: &mut impl Rng,
    audio: &mut dyn Audio,
) -> Option<AppState> {
    match state {
        AppState::MainMenu(menu) => {
            menu.update_hover(held.mouse);
            None
        }
        AppState::Playing(session) => {
            let outcome = session.tick(held, rng, audio);
            finish_session(session, outcome, save_manager)
        }
        AppState::Exit => None,
    }
}

fn main() -> Result<(), String> {
    init_tracing();

    let config = GameConfig::load_or_default(CONFIG_PATH);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(InitFlag::PNG | InitFlag::JPG)?;
    let timer = sdl_context.timer()?;

    let window = video_subsystem
        .window(&config.window_title, SCREEN_WIDTH, SCREEN_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let assets = Assets::load(&texture_creator, &config.assets_dir);
    let sizes = assets.entity_sizes();

    let mut audio = audio::open(&sdl_context, &config.assets_dir, config.sound_enabled);
    audio.start_music(config.music_volume);

    let save_manager = SaveManager::new(config.save_path());
    info!(save = %save_manager.path().display(), fps = config.fps, "game started");

    let mut rng = rand::thread_rng();
    let mut input = InputSystem::new();
    let mut frame_limiter = FrameLimiter::new(config.fps);
    let mut state = main_menu(&save_manager);

    while !matches!(state, AppState::Exit) {
        // Each event is read in the context of the screen it reaches
        for event in InputSystem::poll_events(&mut event_pump) {
            input.set_context(state.input_context());
            let Some(action) = input.translate_event(&event) else {
                continue;
            };
            if let Some(next) = apply_action(&mut state, action, &save_manager, sizes, &mut rng, audio.as_mut()) {
                state = next;
            }
        }

        let held = InputSystem::sample_held(&event_pump);
        if let Some(next) = tick_state(&mut state, &held, &save_manager, &mut rng, audio.as_mut()) {
            state = next;
        }

        let mut renderer = SdlRenderer::new(&mut canvas, &assets);
        renderer.clear();
        match &state {
            AppState::MainMenu(menu) => {
                renderer.draw_image(ImageId::Background, Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT), false)?;
                menu.render(&mut renderer)?;
            }
            AppState::Playing(session) => session.render(&mut renderer, timer.ticks())?,
            AppState::Exit => {}
        }
        renderer.present();

        frame_limiter.wait();
    }

    info!("goodbye");
    Ok(())
}
