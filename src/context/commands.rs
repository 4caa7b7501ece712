//! Context command handlers

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::cli::{ConfigAction, DeleteContextArgs, SetContextArgs};
use crate::error::PlatError;
use crate::ui::confirm_action;

use super::models::Context;
use super::store::ContextStore;

/// Dispatch config subcommands
pub fn run_context_command(
    store: &ContextStore,
    action: &ConfigAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::GetContexts => run_context_list(store),
        ConfigAction::SetContext(args) => run_context_set(store, args),
        ConfigAction::UseContext(args) => run_context_use(store, &args.name),
        ConfigAction::DeleteContext(args) => run_context_delete(store, args),
        ConfigAction::CurrentContext => run_context_show(store),
        ConfigAction::View => run_config_view(store),
    }
}

/// List all contexts
fn run_context_list(store: &ContextStore) -> Result<(), Box<dyn std::error::Error>> {
    let config = store.load()?;

    if config.contexts.is_empty() {
        println!("No contexts configured.");
        println!("\nUse 'platctl config set-context <name> --url <URL>' to create one.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("CURRENT"),
            Cell::new("NAME"),
            Cell::new("URL"),
            Cell::new("TENANT"),
            Cell::new("TOKEN"),
        ]);

    for (name, ctx) in &config.contexts {
        let is_current = config.current_context.as_ref().is_some_and(|c| c == name);

        table.add_row(vec![
            Cell::new(if is_current { "*" } else { "" }),
            Cell::new(name),
            Cell::new(&ctx.url),
            Cell::new(ctx.tenant.as_deref().unwrap_or("<not set>")),
            Cell::new(mask_token(ctx.token.as_deref())),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Show the current context details
fn run_context_show(store: &ContextStore) -> Result<(), Box<dyn std::error::Error>> {
    let config = store.load()?;

    let current_name = config.current_context.as_ref().ok_or_else(|| {
        PlatError::Config(
            "No current context set. Use 'platctl config use-context <name>' to set one."
                .to_string(),
        )
    })?;

    let ctx = config.require(current_name)?;

    println!("Current context: {}", current_name);
    println!("  URL:    {}", ctx.url);
    println!("  Tenant: {}", ctx.tenant.as_deref().unwrap_or("<not set>"));
    println!("  Token:  {}", mask_token(ctx.token.as_deref()));

    Ok(())
}

/// Create or update a named context
fn run_context_set(
    store: &ContextStore,
    args: &SetContextArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let created = store.update(|config| {
        if let Some(existing) = config.contexts.get_mut(&args.name) {
            if let Some(url) = &args.url {
                existing.url = url.clone();
            }
            if args.tenant.is_some() {
                existing.tenant = args.tenant.clone();
            }
            if args.token.is_some() {
                existing.token = args.token.clone();
            }
            return Ok(false);
        }

        let url = args.url.clone().ok_or_else(|| {
            PlatError::Config(format!(
                "--url is required when creating a new context. Usage:\n  \
                 platctl config set-context {} --url <URL> [--tenant <TENANT>] [--token <TOKEN>]",
                args.name
            ))
        })?;
        config.contexts.insert(
            args.name.clone(),
            Context {
                name: String::new(),
                url,
                tenant: args.tenant.clone(),
                token: args.token.clone(),
            },
        );

        // First context becomes current
        if config.contexts.len() == 1 {
            config.current_context = Some(args.name.clone());
        }
        Ok(true)
    })?;

    let verb = if created { "Created" } else { "Updated" };
    println!("✓ {} context '{}'", verb, args.name);
    Ok(())
}

/// Switch the active context
fn run_context_use(store: &ContextStore, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    store.update(|config| {
        config.require(name)?;
        config.current_context = Some(name.to_string());
        Ok(())
    })?;
    println!("✓ Switched to context '{}'", name);
    Ok(())
}

/// Delete a named context
fn run_context_delete(
    store: &ContextStore,
    args: &DeleteContextArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    store.load()?.require(&args.name)?;

    let prompt = format!("Delete context '{}'?", args.name);
    if !confirm_action(&prompt, args.yes)? {
        println!("Aborted.");
        return Ok(());
    }

    store.update(|config| {
        config.require(&args.name)?;
        config.contexts.remove(&args.name);
        if config.current_context.as_deref() == Some(args.name.as_str()) {
            config.current_context = None;
        }
        Ok(())
    })?;
    println!("✓ Deleted context '{}'", args.name);
    Ok(())
}

/// Display the config file contents with tokens masked
fn run_config_view(store: &ContextStore) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = store.load()?;
    for ctx in config.contexts.values_mut() {
        if ctx.token.is_some() {
            ctx.token = Some(mask_token(ctx.token.as_deref()));
        }
    }
    let json = serde_json::to_string_pretty(&config).map_err(PlatError::from)?;
    println!("{}", json);
    Ok(())
}

/// Mask a token for display: last 4 chars or "<not set>"
fn mask_token(token: Option<&str>) -> String {
    match token {
        Some(t) if t.chars().count() >= 4 => {
            let tail: String = t.chars().skip(t.chars().count() - 4).collect();
            format!("****{}", tail)
        }
        Some(_) => "****".to_string(),
        None => "<not set>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> ContextStore {
        ContextStore::with_path(dir.path().join("config.json"))
    }

    fn set_args(name: &str, url: Option<&str>, tenant: Option<&str>) -> SetContextArgs {
        SetContextArgs {
            name: name.to_string(),
            url: url.map(str::to_string),
            tenant: tenant.map(str::to_string),
            token: None,
        }
    }

    fn delete_args(name: &str) -> DeleteContextArgs {
        DeleteContextArgs {
            name: name.to_string(),
            yes: true,
        }
    }

    #[test]
    fn test_mask_token_long() {
        assert_eq!(mask_token(Some("abcdefghijklmnop")), "****mnop");
    }

    #[test]
    fn test_mask_token_short() {
        assert_eq!(mask_token(Some("ab")), "****");
    }

    #[test]
    fn test_mask_token_none() {
        assert_eq!(mask_token(None), "<not set>");
    }

    #[test]
    fn test_context_set_new_requires_url() {
        let dir = TempDir::new().unwrap();
        let result = run_context_set(&test_store(&dir), &set_args("test", None, None));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("--url is required"));
    }

    #[test]
    fn test_context_set_first_becomes_current() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        run_context_set(&store, &set_args("prod", Some("https://prod.example.com"), Some("t-1")))
            .unwrap();
        run_context_set(&store, &set_args("dev", Some("http://localhost:8080"), None)).unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.contexts.len(), 2);
        assert_eq!(config.contexts["prod"].tenant, Some("t-1".to_string()));
        assert_eq!(config.current_context, Some("prod".to_string()));
    }

    #[test]
    fn test_context_set_update_merges() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        run_context_set(&store, &set_args("prod", Some("https://old.example.com"), Some("t-1")))
            .unwrap();
        run_context_set(&store, &set_args("prod", None, Some("t-2"))).unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.contexts["prod"].url, "https://old.example.com");
        assert_eq!(config.contexts["prod"].tenant, Some("t-2".to_string()));
    }

    #[test]
    fn test_context_use_sets_current() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        run_context_set(&store, &set_args("prod", Some("https://p"), None)).unwrap();
        run_context_set(&store, &set_args("dev", Some("https://d"), None)).unwrap();

        run_context_use(&store, "dev").unwrap();
        assert_eq!(store.load().unwrap().current_context, Some("dev".to_string()));
    }

    #[test]
    fn test_context_use_nonexistent_errors() {
        let dir = TempDir::new().unwrap();
        let err = run_context_use(&test_store(&dir), "nonexistent")
            .unwrap_err()
            .to_string();
        assert!(err.contains("not found"));
    }

    #[test]
    fn test_context_use_unknown_lists_available() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        run_context_set(&store, &set_args("prod", Some("https://p"), None)).unwrap();
        run_context_set(&store, &set_args("dev", Some("https://d"), None)).unwrap();

        let err = run_context_use(&store, "stage").unwrap_err().to_string();
        assert_eq!(
            err,
            "Context 'stage' not found. Available contexts: dev, prod"
        );
        assert_eq!(store.load().unwrap().current_context, Some("prod".to_string()));
    }

    #[test]
    fn test_context_delete_clears_current() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        run_context_set(&store, &set_args("prod", Some("https://p"), None)).unwrap();

        run_context_delete(&store, &delete_args("prod")).unwrap();

        let config = store.load().unwrap();
        assert!(config.contexts.is_empty());
        assert!(config.current_context.is_none());
    }

    #[test]
    fn test_context_delete_preserves_current_if_different() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        run_context_set(&store, &set_args("prod", Some("https://p"), None)).unwrap();
        run_context_set(&store, &set_args("dev", Some("https://d"), None)).unwrap();

        run_context_delete(&store, &delete_args("dev")).unwrap();

        let config = store.load().unwrap();
        assert_eq!(config.current_context, Some("prod".to_string()));
        assert_eq!(config.contexts.len(), 1);
    }

    #[test]
    fn test_context_delete_nonexistent_errors() {
        let dir = TempDir::new().unwrap();
        assert!(run_context_delete(&test_store(&dir), &delete_args("nope")).is_err());
    }

    #[test]
    fn test_context_show_without_current_errors() {
        let dir = TempDir::new().unwrap();
        let err = run_context_show(&test_store(&dir)).unwrap_err().to_string();
        assert!(err.contains("No current context set"));
    }
}
