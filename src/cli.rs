use clap::Parser;

const AFTER_HELP: &str = "\
Ejemplos:
  rag-chat \"¿Cómo hago un envío?\"
  rag-chat --interactive
  RAG_API_URL=https://api.envios23.com rag-chat \"¿Qué es el tracking?\"

Variables de entorno:
  RAG_API_URL       URL del API RAG (default: http://localhost:8000)
  TOOL_NAME         Nombre del tool MCP (default: generate_rag_answer)
  SESSION_ID        ID de sesión (default: cli-$USER)
  INCLUDE_SOURCES   Incluir fuentes (default: true)
  RAG_CHAT_VERBOSE  Mostrar diagnósticos en stderr (default: false)";

#[derive(Parser, Debug, Default)]
#[command(name = "rag-chat", version)]
#[command(about = "CLI para interactuar con el API RAG", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    #[arg(short = 'i', long = "interactive", help = "Modo interactivo")]
    pub interactive: bool,

    #[arg(
        short = 's',
        long = "session-id",
        value_name = "SESSION",
        help = "ID de sesión personalizado"
    )]
    pub session_id: Option<String>,

    #[arg(long = "json", help = "Mostrar respuesta como JSON")]
    pub json: bool,

    #[arg(
        long = "api-url",
        value_name = "URL",
        help = "URL base del API RAG (sobrescribe RAG_API_URL)"
    )]
    pub api_url: Option<String>,

    #[arg(
        long = "tool",
        value_name = "NAME",
        help = "Nombre del tool MCP (sobrescribe TOOL_NAME)"
    )]
    pub tool: Option<String>,

    #[arg(long = "no-sources", help = "No mostrar ni solicitar fuentes")]
    pub no_sources: bool,

    #[arg(short = 'v', long = "verbose", help = "Mostrar diagnósticos en stderr")]
    pub verbose: bool,

    #[arg(help = "Pregunta para el asistente RAG")]
    pub query: Option<String>,
}
