use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "copyspark", version, about = "Generate marketing copy for a product with Gemini")]
pub struct Args {
    /// Product name; prompts interactively when omitted
    #[arg(long, requires = "description")]
    pub name: Option<String>,

    /// Product description; prompts interactively when omitted
    #[arg(long, requires = "name")]
    pub description: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub api_base: Option<String>,

    /// Environment variable holding the API key
    #[arg(long)]
    pub api_key_env: Option<String>,

    /// Reject unknown copy types and results that are not exactly three items
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Print the result as JSON instead of cards
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Both inputs given on the command line: run once, no prompts.
    pub fn one_shot(&self) -> Option<(&str, &str)> {
        Some((self.name.as_deref()?, self.description.as_deref()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_needs_both_inputs() {
        assert!(Args::try_parse_from(["copyspark", "--name", "Quantum Sneakers"]).is_err());
        assert!(Args::try_parse_from(["copyspark", "--description", "Shoes"]).is_err());
        let a = Args::parse_from(["copyspark"]);
        assert!(a.one_shot().is_none());
        let b = Args::parse_from(["copyspark", "--name", "N", "--description", "D", "--json"]);
        assert_eq!(b.one_shot(), Some(("N", "D")));
        assert!(b.json);
    }
}
