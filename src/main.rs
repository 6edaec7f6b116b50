use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wanderer::{Player, PlayerConfig, PlayerError};

/// One scripted player action
#[derive(Debug, Clone, Copy)]
enum Action {
    Grab(&'static str),
    Drop(&'static str),
    Examine(&'static str),
    Use(&'static str),
    Walk(&'static str),
    Fly(i32, i32),
    Rest,
    Undo,
}

/// The demo session: some mistakes, some wandering, and a fatal diet.
/// The second Sword bite kills the player, so the rest never runs.
const SESSION: &[Action] = &[
    Action::Undo,
    Action::Drop("TTTTTT"),
    Action::Grab("Sword"),
    Action::Examine("Sword"),
    Action::Drop("Sword"),
    Action::Examine("Sword"),
    Action::Undo,
    Action::Examine("Sword"),
    Action::Walk("Left"),
    Action::Walk("Left"),
    Action::Walk("Up"),
    Action::Walk("Up"),
    Action::Walk("Down"),
    Action::Walk("Down"),
    Action::Walk("Right"),
    Action::Walk("Right"),
    Action::Fly(10, 10),
    Action::Fly(10, 10),
    Action::Grab("Sword"),
    Action::Grab("Sword"),
    Action::Grab("Sword"),
    Action::Use("Sword"),
    Action::Use("Sword"),
    Action::Use("Sword"),
    Action::Rest,
    Action::Grab("null"),
    Action::Use("null"),
];

fn perform(player: &mut Player, action: Action) -> Result<(), PlayerError> {
    match action {
        Action::Grab(item) => player.grab(item),
        Action::Drop(item) => player.drop_item(item).map(|_| ()),
        Action::Examine(item) => {
            player.examine(item);
            Ok(())
        }
        Action::Use(item) => player.use_item(item).map(|_| ()),
        Action::Walk(direction) => {
            player.walk(direction);
            Ok(())
        }
        Action::Fly(x, y) => {
            player.fly(x, y);
            Ok(())
        }
        Action::Rest => {
            player.rest();
            Ok(())
        }
        Action::Undo => player.undo(),
    }
}

/// Plays `session` in order, handing each narration line to `render`
///
/// Returns the index of the action that killed the player, if any.
fn run(player: &mut Player, session: &[Action], mut render: impl FnMut(String)) -> Option<usize> {
    for (index, &action) in session.iter().enumerate() {
        let result = perform(player, action);

        for event in player.take_events() {
            render(event.to_string());
        }

        match result {
            Ok(()) => {}
            Err(e) if e.is_fatal() => {
                warn!(?action, "Session over");
                return Some(index);
            }
            Err(e) => render(e.to_string()),
        }
    }
    None
}

fn main() -> Result<(), String> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PlayerConfig::load_or_default()
        .map_err(|e| format!("Failed to load player config: {}", e))?;
    let mut player =
        Player::from_config(&config).map_err(|e| format!("Failed to create player: {}", e))?;

    info!(
        capacity = config.inventory_capacity,
        policy = ?config.direction_policy,
        "Starting session"
    );

    run(&mut player, SESSION, |line| println!("{}", line));

    info!(
        power = player.power(),
        position = %player.position(),
        items = player.inventory().len(),
        "Session finished"
    );
    Ok(())
}
