// SPDX-License-Identifier: MPL-2.0
use onair::app::{self, Flags};
use std::process::ExitCode;

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        list: args.contains("--list"),
        select: args.opt_value_from_str("--select")?,
        url: args.opt_value_from_str("--url")?,
        title: args.opt_value_from_str("--title")?,
        description: args.opt_value_from_str("--description")?,
        duration_secs: args.opt_value_from_str("--duration")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }
    Ok(flags)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("onair: {err}");
            eprintln!(
                "usage: onair [--list] [--select N | --url URL [--title T] [--description D]] \
                 [--duration SECS] [--lang LANG] [--config-dir DIR]"
            );
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            log::error!("failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(app::run(flags)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
