use std::env;
use std::process::ExitCode;

use ruscalendar::queries;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(year_arg) = args.next() else {
        eprintln!("usage: ruscalendar <year> [region]");
        return ExitCode::FAILURE;
    };
    let year = match year_arg.parse::<i32>() {
        Ok(year) => year,
        Err(error) => {
            eprintln!("bad year '{}': {}", year_arg, error);
            return ExitCode::FAILURE;
        }
    };
    let region = args.next();

    match queries::holidays(year, region.as_deref()) {
        Ok(map) => {
            for (day, name) in map.iter() {
                println!("{}-{:02}-{:02}  {}", year, day.month(), day.day(), name);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
