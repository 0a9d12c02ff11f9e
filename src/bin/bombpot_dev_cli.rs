// src/bin/bombpot_dev_cli.rs

use std::env;

use bombpot_engine::api::{build_hand_view, HandViewDto};
use bombpot_engine::domain::{Card, Position, Street, TableConfig, TableId};
use bombpot_engine::engine::{
    Action, BotDecision, BotPolicy, EngineError, EquityBot, RandomFoldBot, TableManager,
};
use bombpot_engine::infra::RngSeed;

/// Сценарий героя на раздачу.
#[derive(Copy, Clone, Debug)]
enum Scenario {
    /// Герой только чекает и сбрасывает на любую ставку.
    CheckDown,
    /// Герой ставит на флопе, дальше чекает.
    BetFlop,
    /// Герой ставит на каждой улице.
    BetEveryStreet,
}

fn main() {
    env_logger::init();

    // Аргументы: [seed] [hero]. По умолчанию seed=42, герой EP.
    let mut args = env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let hero = Position::new(args.next().unwrap_or_else(|| "EP".to_string()));

    println!("bombpot_dev_cli: seed={seed}, hero={hero}");

    let mut manager = TableManager::new();

    let tables = [
        ("6-max", TableConfig::six_max()),
        ("7-max", TableConfig::seven_max()),
    ];

    for (name, config) in tables {
        if config.index_of(&hero).is_none() {
            println!("[CLI] На столе {name} нет места {hero}, пропускаем.");
            continue;
        }

        let table_id = match manager.add_table(config, RngSeed::from_u64(seed)) {
            Ok(id) => id,
            Err(e) => {
                println!("[CLI] ОШИБКА add_table({name}): {e}");
                continue;
            }
        };

        println!();
        println!("================ TABLE {name} (id={table_id}) =================");

        let mut random_bots = RandomFoldBot::from_seed(0.3, 0.2, seed);
        let mut equity_bots = EquityBot::default();

        for scenario in [Scenario::CheckDown, Scenario::BetFlop, Scenario::BetEveryStreet] {
            // Сценарий с одной ставкой играем против "силовых" ботов.
            let policy: &mut dyn BotPolicy = match scenario {
                Scenario::BetFlop => &mut equity_bots,
                _ => &mut random_bots,
            };
            if let Err(e) = play_hand(&mut manager, table_id, &hero, scenario, policy) {
                println!("[CLI] ОШИБКА в раздаче {scenario:?}: {e}");
            }
        }
    }

    println!();
    println!("[CLI] Завершение работы dev-CLI.");
}

/// Одна раздача от старта до шоудауна.
fn play_hand(
    manager: &mut TableManager,
    table_id: TableId,
    hero: &Position,
    scenario: Scenario,
    policy: &mut dyn BotPolicy,
) -> Result<(), EngineError> {
    println!();
    println!("------ HAND {scenario:?} ------");

    let hand = manager.start_hand(table_id, hero)?;
    print_view(&build_hand_view(hand));

    const MAX_STEPS: u32 = 64;
    for step in 1..=MAX_STEPS {
        let hand = manager.play_bots(table_id, policy)?;
        if hand.is_finished() {
            break;
        }

        let street = hand.street;

        if hand.awaiting_response.is_some() {
            let decision = match scenario {
                Scenario::CheckDown => BotDecision::Fold,
                _ => BotDecision::Continue,
            };
            println!("[CLI] [step={step}] {street}: {hero} answers bet -> {decision:?}");

            let hand = manager.respond_to_bet(table_id, hero, decision)?;
            print_view(&build_hand_view(hand));
            if hand.is_finished() {
                break;
            }
            continue;
        }

        let action = match (scenario, street) {
            (Scenario::CheckDown, _) => Action::Check,
            (Scenario::BetFlop, Street::Flop) => Action::Bet,
            (Scenario::BetFlop, _) => Action::Check,
            (Scenario::BetEveryStreet, _) => Action::Bet,
        };
        println!("[CLI] [step={step}] {street}: {hero} -> {action}");

        let hand = manager.apply_action(table_id, hero, action, policy)?;
        print_view(&build_hand_view(hand));
        if hand.is_finished() {
            break;
        }
    }

    if let Some(hand) = manager.hand(table_id) {
        print_showdown(&build_hand_view(hand));
    }
    Ok(())
}

fn cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_view(view: &HandViewDto) {
    println!(
        "  hand={} street={} actor={}",
        view.hand_id,
        view.street,
        view.current_actor
            .as_ref()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("  board1: [{}]", cards(&view.board1));
    println!("  board2: [{}]", cards(&view.board2));
    for seat in &view.seats {
        let hole = seat
            .hole_cards
            .as_deref()
            .map(cards)
            .unwrap_or_else(|| "?? ?? ?? ??".to_string());
        println!(
            "    {:<4} {}{}  {}",
            seat.position.as_str(),
            if seat.is_hero { "*" } else { " " },
            if seat.folded { "F" } else { " " },
            hole
        );
    }
}

fn print_showdown(view: &HandViewDto) {
    let Some(result) = &view.showdown else {
        println!("=== РАЗДАЧА НЕ ЗАВЕРШЕНА ===");
        return;
    };

    println!("=== РАЗДАЧА ЗАВЕРШЕНА ===");
    for board in [&result.board1, &result.board2] {
        let winners = board
            .winners
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "  {}: {} ({}){}",
            board.board,
            winners,
            board.category,
            if board.is_split() { " | split" } else { "" }
        );
        for reveal in &board.reveals {
            println!("      {:<4} {}", reveal.position.as_str(), reveal.description);
        }
    }
}
