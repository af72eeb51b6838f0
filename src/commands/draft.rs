use crate::*;
use anyhow::Context;

fn parse_assignment(raw: &str) -> anyhow::Result<(&str, &str)> {
    let (id, value) = raw
        .split_once('=')
        .with_context(|| format!("expected ID=VALUE, got {:?}", raw))?;
    Ok((id.trim(), value))
}

pub fn handle_draft_commands(cli: &Cli, session: &Session) -> anyhow::Result<bool> {
    let Commands::Fill {
        from,
        sets,
        confirm,
        unconfirm,
        out,
    } = &cli.command
    else {
        return Ok(false);
    };

    let draft = match from {
        Some(source) => read_draft(source)?,
        None => Draft::default(),
    };
    let mut model = FormModel::from_draft(esg_declaration(), &draft)?;

    for raw in sets {
        let (id, value) = parse_assignment(raw)?;
        let field = schema::field(model.schema(), id)?;
        let value = parse_cli(field, value)?;
        model
            .set_value(id, value)
            .with_context(|| format!("applying --set {}", raw))?;
    }
    if *confirm {
        model.set_confirmed(true);
    } else if *unconfirm {
        model.set_confirmed(false);
    }

    let updated = model.to_draft()?;
    match out {
        Some(path) => {
            write_json(path, &updated)?;
            print_one(session.json, path.display().to_string(), |p| {
                format!("draft written to {}", p)
            })?;
        }
        None if session.json => print_one(true, &updated, |_| String::new())?,
        None => println!("{}", serde_json::to_string_pretty(&updated)?),
    }
    Ok(true)
}
