use crate::*;

fn kind_label(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Choice { options } => format!("choice({})", options.join("|")),
        FieldKind::MultiChoice { options } => format!("multi_choice({})", options.join("|")),
        FieldKind::Amount { precision, unit } => {
            let precision = match precision {
                Precision::Integer => "integer",
                Precision::Decimal => "decimal",
            };
            format!("amount({}, {})", precision, unit)
        }
        FieldKind::Text => "text".to_string(),
        FieldKind::Files { accept, multiple } => format!(
            "files({}{})",
            accept.join("|"),
            if *multiple { ", multiple" } else { "" }
        ),
    }
}

fn print_schema(json: bool, schema: &Schema) -> anyhow::Result<()> {
    if json {
        return print_one(true, schema, |_| String::new());
    }
    println!("{}", schema.title);
    for section in &schema.sections {
        println!("[{}] {}", section.id, section.title);
        for f in &section.fields {
            let gate = match &f.visible_when {
                Visibility::Always => String::new(),
                Visibility::When { field, equals } => format!("\twhen {} == {}", field, equals),
            };
            println!("  {}\t{}\t{}{}", f.id, kind_label(&f.kind), f.label, gate);
        }
    }
    Ok(())
}

fn issue_row(severity: &str, issue: &Issue) -> String {
    format!(
        "{}\t{}\t{}",
        severity,
        issue.field.as_deref().unwrap_or("-"),
        issue.message
    )
}

fn print_issues(result: &ValidationResult) {
    for e in &result.errors {
        println!("{}", issue_row("error", e));
    }
    for w in &result.warnings {
        println!("{}", issue_row("warning", w));
    }
}

fn print_summary(report: &SummaryReport) {
    for section in &report.summary.sections {
        println!("[{}] {}", section.id, section.title);
        for e in &section.entries {
            let marker = if e.active { "" } else { " (inactive)" };
            println!("  {}: {}{}", e.id, display_value(&e.value), marker);
        }
        if let Some(total) = section.total {
            println!("  total: {}", total);
        }
    }
    println!();
    for line in &report.lines {
        println!("{}", line);
    }
}

fn load_model(source: &str) -> anyhow::Result<FormModel> {
    let draft = read_draft(source)?;
    Ok(FormModel::from_draft(esg_declaration(), &draft)?)
}

pub fn handle_form_commands(cli: &Cli, session: &Session) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Schema => {
            let schema = esg_declaration();
            schema::check(&schema)?;
            print_schema(session.json, &schema)?;
        }
        Commands::Visibility { draft } => {
            let model = load_model(draft)?;
            let mut items = Vec::new();
            for section in &model.schema().sections {
                for f in &section.fields {
                    items.push(VisibilityItem {
                        section: section.id.clone(),
                        field: f.id.clone(),
                        visible: model.is_visible(&f.id)?,
                    });
                }
            }
            print_rows(session.json, &items, |i| {
                format!(
                    "{}\t{}\t{}",
                    i.section,
                    i.field,
                    if i.visible { "visible" } else { "hidden" }
                )
            })?;
        }
        Commands::Validate { draft } => {
            let schema = esg_declaration();
            let submission = derive_submission(&schema, &read_draft(draft)?)?;
            let result = validate(&schema, &submission);
            let blocked = is_blocked(&result);
            if session.json {
                print_status(true, !blocked, &result, |_| String::new())?;
            } else {
                println!(
                    "{}: {} error(s), {} warning(s)",
                    if blocked { "blocked" } else { "ok" },
                    result.errors.len(),
                    result.warnings.len()
                );
                print_issues(&result);
            }
        }
        Commands::Summarize { draft } => {
            let model = load_model(draft)?;
            let summary = model.summarize();
            let lines = confirmation_lines(&summary, &session.currency);
            let report = SummaryReport { summary, lines };
            if session.json {
                print_one(true, &report, |_| String::new())?;
            } else {
                print_summary(&report);
            }
        }
        Commands::Submit { draft, export } => {
            let mut model = load_model(draft)?;
            let outcome = model.submit()?;
            let lines = match &outcome {
                Outcome::Accepted { summary, .. } => confirmation_lines(summary, &session.currency),
                Outcome::Rejected { .. } => vec![],
            };
            let report = SubmitReport {
                state: model.state(),
                outcome,
                lines,
                submission: model.finalized().cloned(),
            };
            let accepted = report.state == SubmitState::Accepted;
            if accepted {
                if let Some(path) = export {
                    write_json(path, &report)?;
                }
            }

            if session.json {
                match &report.outcome {
                    Outcome::Accepted { .. } => print_one(true, &report, |_| String::new())?,
                    Outcome::Rejected { result } => {
                        let message = format!(
                            "submission rejected with {} blocking error(s)",
                            result.errors.len()
                        );
                        print_rejected(SUBMISSION_REJECTED, message, &report)?;
                    }
                }
            } else {
                match &report.outcome {
                    Outcome::Accepted {
                        reference,
                        warnings,
                        ..
                    } => {
                        for w in warnings {
                            println!("{}", issue_row("warning", w));
                        }
                        println!("ESG data submitted successfully! Reference: {}", reference);
                        println!("Summary of your submission:");
                        for line in &report.lines {
                            println!("{}", line);
                        }
                    }
                    Outcome::Rejected { result } => {
                        println!("submission rejected");
                        print_issues(result);
                    }
                }
            }
            if !accepted {
                std::process::exit(1);
            }
        }
        Commands::Fill { .. } => {}
    }
    Ok(())
}
