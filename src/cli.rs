use weekday_picker::Cli;

fn main() -> anyhow::Result<()> {
    // Log to stderr; quiet by default so the month view is not disturbed
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    Cli::run()
}
