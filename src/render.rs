// Frame report rendering for terminal and JSON output
use framegen_core::{FrameResult, Trainer};
use serde::Serialize;

/// Formats one frame in the report layout: PID in zero-padded 8-digit hex,
/// then nature, ability, the six IVs by name, and shininess.
pub fn format_frame(result: &FrameResult) -> String {
    let g = &result.generated;
    let mut output = String::new();

    output.push_str(&format!("Frame {}\n", result.frame));
    output.push_str(&format!("  PID: 0x{:08X}\n", g.pid));
    output.push_str(&format!("  Nature: {} ({})\n", g.nature_name(), g.nature));
    output.push_str(&format!("  Ability: {}\n", g.ability));
    output.push_str("  IVs:\n");
    output.push_str(&format!("    HP: {}\n", g.ivs.hp));
    output.push_str(&format!("    Attack: {}\n", g.ivs.attack));
    output.push_str(&format!("    Defense: {}\n", g.ivs.defense));
    output.push_str(&format!("    Speed: {}\n", g.ivs.speed));
    output.push_str(&format!("    Sp. Attack: {}\n", g.ivs.sp_attack));
    output.push_str(&format!("    Sp. Defense: {}\n", g.ivs.sp_defense));
    output.push_str(&format!("  Shiny: {} (value {})\n", g.shiny, g.shiny_value));

    output
}

pub fn print_report(trainer: &Trainer, seed: u32, results: &[FrameResult]) {
    println!("Trainer: {} (TID {}, SID {})", trainer.name, trainer.tid, trainer.sid);
    println!("Seed: 0x{:08X}", seed);
    println!("\nResults:\n");

    for result in results {
        print!("{}", format_frame(result));
        println!("{}", "-".repeat(40));
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    trainer: &'a Trainer,
    seed: u32,
    frames: &'a [FrameResult],
}

pub fn print_json(trainer: &Trainer, seed: u32, results: &[FrameResult]) {
    let report = JsonReport {
        trainer,
        seed,
        frames: results,
    };
    match serde_json::to_string_pretty(&report) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Failed to serialize report: {}", e);
            std::process::exit(1);
        }
    }
}
