//! Prompts for the text generator. Built only from computed facts.

use std::fmt::Write;

use concord_core::models::ModuleConsensus;

/// Prompt asking for a short prose summary of a module's consensus.
pub fn summary_prompt(module_name: &str, result: &ModuleConsensus, max_statements: usize) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Summarize how well the team agrees on the module \"{module_name}\"."
    );
    let _ = writeln!(
        prompt,
        "Describe the majority view first, then each divergent viewpoint. \
         Do not change or recompute any figure below.\n"
    );
    write_facts(&mut prompt, result, max_statements);
    prompt
}

/// Prompt asking for an architecture decision record.
pub fn adr_prompt(module_name: &str, result: &ModuleConsensus, max_statements: usize) -> String {
    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Write an architecture decision record for the module \"{module_name}\" in Markdown \
         with the sections Status, Context, Decision, Alternatives considered, Consequences."
    );
    let _ = writeln!(
        prompt,
        "The decision is the majority view; alternatives are the divergent views. \
         Use the status exactly as given. Do not change or recompute any figure below.\n"
    );
    write_facts(&mut prompt, result, max_statements);
    prompt
}

fn write_facts(out: &mut String, result: &ModuleConsensus, max_statements: usize) {
    let _ = writeln!(out, "Status: {}", result.status);
    let _ = writeln!(out, "Consensus: {:.1}%", result.consensus_percentage);
    let _ = writeln!(
        out,
        "Statements considered: {} of {}",
        result.valid_statements, result.total_statements
    );
    for cluster in &result.clusters {
        let _ = writeln!(
            out,
            "\nViewpoint {} ({:.1}% of the team, {} statement{}):",
            cluster.rank,
            cluster.percentage,
            cluster.size(),
            if cluster.size() == 1 { "" } else { "s" }
        );
        if let Some(rep) = cluster.representative() {
            let _ = writeln!(out, "Representative: \"{}\"", rep.content);
        }
        for member in cluster
            .members
            .iter()
            .filter(|m| m.id != cluster.representative_id)
            .take(max_statements.saturating_sub(1))
        {
            let _ = writeln!(out, "- \"{}\"", member.content);
        }
    }
}
