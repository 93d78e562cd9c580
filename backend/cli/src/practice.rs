//! Interactive practice session against a running relay.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;

use standfast_core::{EngineError, ScenarioId};
use standfast_engine::{Debrief, ScenarioSession};
use standfast_relay::HttpChatRelay;

pub async fn run(scenario: ScenarioId, relay_url: String) -> Result<()> {
    let relay = Arc::new(HttpChatRelay::new(relay_url));
    let mut session = ScenarioSession::new(scenario, relay);

    print_banner(&session);

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        if input == "/quit" {
            break;
        }
        if input == "/scenarios" {
            for id in ScenarioId::ALL {
                println!("  {id} — {}", id.definition().subtitle);
            }
            continue;
        }
        if let Some(rest) = input.strip_prefix("/switch ") {
            match rest.trim().parse::<ScenarioId>() {
                Ok(id) => {
                    session.change_scenario(id);
                    print_banner(&session);
                }
                Err(err) => println!("! {err} (try /scenarios)"),
            }
            continue;
        }

        match session.submit_user_message(input).await {
            Ok(report) => {
                println!("{}> {}", session.scenario().definition().character, report.reply);
                println!("  [health {}]", report.health);
                if report.outcome.is_some() {
                    print_debrief(&session);
                    break;
                }
            }
            Err(EngineError::EmptyMessage) => continue,
            Err(EngineError::ReplyPending) => println!("! still waiting on a reply"),
            Err(EngineError::SessionComplete) => break,
            Err(EngineError::Relay(err)) => {
                println!("! message not sent ({err}) — try again");
            }
        }
    }

    if let Some(report) = session.report() {
        tracing::info!(report = %serde_json::to_string(&report)?, "session outcome");
    }
    Ok(())
}

fn print_banner(session: &ScenarioSession) {
    let def = session.scenario().definition();
    println!();
    println!("=== {} — {} ===", def.title, def.subtitle);
    println!("(commands: /switch <id>, /scenarios, /quit)");
    println!("{}> {}", def.character, def.opening_message);
}

fn print_debrief(session: &ScenarioSession) {
    if let Some(debrief) = Debrief::for_session(session) {
        println!();
        println!("=== {} ===", debrief.verdict);
        println!("Analysis: {}", debrief.analysis);
        println!("Critique: {}", debrief.critique);
        println!("Suggestions: {}", debrief.suggestion);
        if let Some(report) = session.report() {
            if let Some(score) = report.score {
                println!("Score: {score}");
            }
        }
    }
}
