use super::*;

/// `--max-game-seconds` and `-max_game_seconds` both name the max_game_seconds entry
fn entry_name(mut arg_name: &str) -> String {
    for _ in 0..2 {
        if let Some(stripped) = arg_name.strip_prefix('-') {
            arg_name = stripped;
        }
    }
    arg_name.replace('-', "_")
}

#[derive(Debug, PartialEq)]
struct Arg {
    /// Position on the command line, the program name is 0
    position: usize,
    name: String,
    values: Vec<String>,
}

/// Groups each --option with the values that follow it
fn group_args(args: &[String]) -> Result<Vec<Arg>, Box<dyn Error>> {
    let (program, rest) = match args.split_first() {
        Some(split) => split,
        None => return Ok(Vec::new()),
    };
    if program.starts_with('-') {
        return Err(format!(
            "first command line argument {} should have been the program name",
            program
        )
        .into());
    }
    let mut grouped: Vec<Arg> = Vec::new();
    for (i, arg) in rest.iter().enumerate() {
        if arg.starts_with('-') {
            grouped.push(Arg {
                position: i + 1,
                name: arg.clone(),
                values: Vec::new(),
            });
        } else {
            grouped
                .last_mut()
                .ok_or_else(|| format!("{} is a value with no --option-name before it", arg))?
                .values
                .push(arg.clone());
        }
    }
    Ok(grouped)
}

pub fn parse_args(builder: &mut ConfigBuilder, args: Vec<String>) -> Result<(), Box<dyn Error>> {
    for arg in group_args(&args)? {
        if arg.values.len() > 1 {
            return Err(format!(
                "command line argument {} ({}) has multiple values: {}",
                arg.position,
                arg.name,
                arg.values.join(" ")
            )
            .into());
        }
        builder
            .entry(&entry_name(&arg.name))
            .ok_or_else(|| format!("{} is not a valid command line option", arg.name))?
            .set_text(
                arg.values.first().map(String::as_str),
                format!("{} command line argument", arg.name),
            )?;
    }
    Ok(())
}
