use invoke_binary::runtime::RealRuntime;

/// invoke-binary - run the companion binary built for this platform
///
/// Looks for `main-<os>-<arch>-<version>` next to this executable, runs it with
/// the same stdin, stdout and stderr, and exits with its status code.
/// Command-line arguments are not passed on.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let code = invoke_binary::launch(&RealRuntime);
    std::process::exit(code);
}
