use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "infinityhub")]
#[command(author, version, about = "InfinityHub demo backend with an AI assistant", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Send a single chat message to the assistant
    Chat {
        prompt: String,

        #[arg(short = 'c', long)]
        category: Option<String>,
    },

    /// Generate content ideas for a topic
    Ideas { topic: String },

    /// Submit every line of a file as a chat message
    Batch {
        file: String,

        #[arg(short, long, default_value = "5")]
        concurrency: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["infinityhub", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host, None);
                assert_eq!(port, Some(9000));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_batch_default_concurrency() {
        let cli = Cli::try_parse_from(["infinityhub", "batch", "prompts.txt"]).unwrap();
        match cli.command {
            Commands::Batch { file, concurrency } => {
                assert_eq!(file, "prompts.txt");
                assert_eq!(concurrency, 5);
            }
            _ => panic!("expected batch"),
        }
    }
}
