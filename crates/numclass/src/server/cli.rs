use numclass_core::{config::resolve_port, config::DEFAULT_PORT, trivia::DEFAULT_TRIVIA_URL};

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on (unparseable values fall back to 3000)
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT, value_parser = parse_port)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Base URL of the numbers trivia provider
    #[arg(long, env = "TRIVIA_API_URL", default_value = DEFAULT_TRIVIA_URL)]
    pub trivia_url: String,

    /// Timeout in seconds for each trivia request
    #[arg(long, env = "TRIVIA_TIMEOUT", default_value = "10")]
    pub trivia_timeout: u64,
}

fn parse_port(raw: &str) -> Result<u16, std::convert::Infallible> {
    Ok(resolve_port(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::sync::Mutex;

    // Tests that touch `PORT` share the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn parse_with_port_env(value: Option<&str>) -> u16 {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        match value {
            Some(value) => std::env::set_var("PORT", value),
            None => std::env::remove_var("PORT"),
        }
        let app = TestApp::try_parse_from(["numclass"]);
        std::env::remove_var("PORT");
        app.unwrap().serve.port
    }

    #[derive(Debug, clap::Parser)]
    struct TestApp {
        #[clap(flatten)]
        serve: ServeOptions,
    }

    #[test]
    fn test_port_flag() {
        let app = TestApp::try_parse_from(["numclass", "--port", "8080"]).unwrap();
        assert_eq!(app.serve.port, 8080);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let app = TestApp::try_parse_from(["numclass", "--port", "not-a-port"]).unwrap();
        assert_eq!(app.serve.port, DEFAULT_PORT);
    }

    #[test]
    fn test_port_env() {
        assert_eq!(parse_with_port_env(Some("8080")), 8080);
    }

    #[test]
    fn test_invalid_port_env_falls_back() {
        assert_eq!(parse_with_port_env(Some("abc")), DEFAULT_PORT);
    }

    #[test]
    fn test_unset_port_env_uses_default() {
        assert_eq!(parse_with_port_env(None), DEFAULT_PORT);
    }

    #[test]
    fn test_trivia_flags() {
        let app = TestApp::try_parse_from([
            "numclass",
            "--trivia-url",
            "http://localhost:9000",
            "--trivia-timeout",
            "3",
        ])
        .unwrap();
        assert_eq!(app.serve.trivia_url, "http://localhost:9000");
        assert_eq!(app.serve.trivia_timeout, 3);
    }
}
