//! Plain Markdown renderings, used whenever the generator is not.

use std::fmt::Write;

use concord_core::models::{Cluster, ConsensusStatus, ModuleConsensus};

pub fn plain_summary(module_name: &str, result: &ModuleConsensus) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {module_name}: consensus summary\n");

    if !result.has_sufficient_data() {
        let _ = writeln!(
            out,
            "Not enough data yet: {} usable statement{} of {} recorded.",
            result.valid_statements,
            plural(result.valid_statements),
            result.total_statements
        );
        if let Some(only) = result.dominant().and_then(Cluster::representative) {
            let _ = writeln!(out, "\nSo far: \"{}\"", only.content);
        }
        return out;
    }

    let _ = writeln!(
        out,
        "**Status:** {} ({:.1}% agreement across {} statement{})\n",
        result.status,
        result.consensus_percentage,
        result.valid_statements,
        plural(result.valid_statements)
    );
    if let Some(dominant) = result.dominant() {
        let _ = writeln!(out, "## Majority view\n");
        write_cluster(&mut out, dominant);
    }
    let divergent = result.divergent();
    if !divergent.is_empty() {
        let _ = writeln!(out, "\n## Divergent views\n");
        for cluster in divergent {
            write_cluster(&mut out, cluster);
        }
    }
    write_excluded(&mut out, result);
    out
}

pub fn plain_adr(module_name: &str, result: &ModuleConsensus) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# ADR: {module_name}\n");
    let _ = writeln!(out, "## Status\n\n{}\n", adr_status(result.status));
    let _ = writeln!(
        out,
        "## Context\n\n{} of {} recorded statements were compared; {:.1}% of them agree.\n",
        result.valid_statements, result.total_statements, result.consensus_percentage
    );

    let _ = writeln!(out, "## Decision\n");
    match result.dominant().and_then(Cluster::representative) {
        Some(rep) => {
            let _ = writeln!(out, "{}\n", rep.content);
        }
        None => {
            let _ = writeln!(out, "No decision can be drawn yet.\n");
        }
    }

    let _ = writeln!(out, "## Alternatives considered\n");
    let divergent = result.divergent();
    if divergent.is_empty() {
        let _ = writeln!(out, "None recorded.\n");
    } else {
        for cluster in divergent {
            if let Some(rep) = cluster.representative() {
                let _ = writeln!(out, "- {} ({:.1}%)", rep.content, cluster.percentage);
            }
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "## Consequences\n");
    let _ = writeln!(
        out,
        "{}",
        match result.status {
            ConsensusStatus::Accepted => "The team shares this understanding; treat it as the reference.",
            ConsensusStatus::Proposed => "A majority holds this view; the alternatives should be reconciled before it is relied on.",
            ConsensusStatus::Contested => "No view holds a majority; the module needs a design discussion.",
            ConsensusStatus::InsufficientData => "Collect more statements before deciding.",
        }
    );
    out
}

fn adr_status(status: ConsensusStatus) -> &'static str {
    match status {
        ConsensusStatus::Accepted => "Accepted",
        ConsensusStatus::Proposed => "Proposed",
        ConsensusStatus::Contested | ConsensusStatus::InsufficientData => "Draft",
    }
}

fn write_cluster(out: &mut String, cluster: &Cluster) {
    let rep = cluster
        .representative()
        .map(|r| r.content.as_str())
        .unwrap_or_default();
    let _ = write!(
        out,
        "- **{:.1}%** ({} statement{}): \"{}\"",
        cluster.percentage,
        cluster.size(),
        plural(cluster.size()),
        rep
    );
    if let Some(conf) = cluster.mean_confidence {
        let _ = write!(out, " (mean confidence {conf:.1}/5)");
    }
    let _ = writeln!(out);
}

fn write_excluded(out: &mut String, result: &ModuleConsensus) {
    if result.excluded.is_empty() {
        return;
    }
    let _ = writeln!(
        out,
        "\n_{} statement{} without a usable embedding {} not counted._",
        result.excluded.len(),
        plural(result.excluded.len()),
        if result.excluded.len() == 1 { "was" } else { "were" }
    );
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
