//! CharBldr Player - composition root binary.
//!
//! Native usage:
//!
//! ```text
//! charbldr-player list <resource>
//! charbldr-player get <resource> <index>
//! charbldr-player levels <class>
//! charbldr-player upgrade-character <file>
//! charbldr-player import-character <slot> <file>
//! charbldr-player import-homebrew <file>
//! charbldr-player export-homebrew
//! ```

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charbldr_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    desktop::run(std::env::args().skip(1).collect()).await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting CharBldr Player");

    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = browser::run().await {
            tracing::error!(error = %e, "CharBldr Player failed");
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
mod desktop {
    use std::str::FromStr;
    use std::sync::Arc;

    use anyhow::{anyhow, bail, Context};
    use charbldr_domain::ResourceType;
    use serde::Serialize;

    use charbldr_player::infrastructure::http_client::ReqwestTransport;
    use charbldr_player::infrastructure::platform::{
        default_storage_dir, FileKeyValueStore, TokioSleep,
    };
    use charbldr_player::infrastructure::{ResponseCache, SrdApiClient, SystemClock};
    use charbldr_player::{
        upgrade_character, CharacterStore, HomebrewStore, PlayerConfig, Repositories,
        RepositoryContext,
    };

    const DATA_FILE: &str = "storage.json";
    const CACHE_FILE: &str = "cache.json";

    pub async fn run(args: Vec<String>) -> anyhow::Result<()> {
        let config = PlayerConfig::from_env()?;
        let storage_dir = config.storage_path.clone().unwrap_or_else(default_storage_dir);
        tracing::info!(api_url = %config.api_url, storage = ?storage_dir, "Starting CharBldr Player");

        let data = Arc::new(
            FileKeyValueStore::open(storage_dir.join(DATA_FILE)).context("opening character storage")?,
        );
        let cache = Arc::new(
            FileKeyValueStore::open(storage_dir.join(CACHE_FILE)).context("opening response cache")?,
        );

        let homebrew = Arc::new(
            HomebrewStore::load(data.clone(), Arc::new(SystemClock::new()))
                .context("loading homebrew bank")?,
        );
        let characters = CharacterStore::new(data);
        let api = Arc::new(SrdApiClient::new(
            config.api_url.clone(),
            Arc::new(ReqwestTransport::new()),
            ResponseCache::new(cache),
            Arc::new(TokioSleep),
            config.retry,
        ));
        let repositories = Repositories::new(RepositoryContext::new(api, homebrew.clone()));

        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match args.as_slice() {
            ["list", resource] => {
                let list = match parse_resource(resource)? {
                    ResourceType::Races => repositories.races.get_all().await?,
                    ResourceType::Subraces => repositories.subraces.get_all().await?,
                    ResourceType::Traits => repositories.traits.get_all().await?,
                    ResourceType::Classes => repositories.classes.get_all().await?,
                    ResourceType::Subclasses => repositories.subclasses.get_all().await?,
                    ResourceType::Features => repositories.features.get_all().await?,
                    ResourceType::Spells => repositories.spells.get_all().await?,
                    ResourceType::Equipment => repositories.equipment.get_all().await?,
                    other => bail!("no repository for {}", other),
                };
                print_json(&list)
            }
            ["get", resource, index] => match parse_resource(resource)? {
                ResourceType::Races => print_found(repositories.races.get(index).await?),
                ResourceType::Subraces => print_found(repositories.subraces.get(index).await?),
                ResourceType::Traits => print_found(repositories.traits.get(index).await?),
                ResourceType::Classes => print_found(repositories.classes.get(index).await?),
                ResourceType::Subclasses => print_found(repositories.subclasses.get(index).await?),
                ResourceType::Features => print_found(repositories.features.get(index).await?),
                ResourceType::Spells => print_found(repositories.spells.get(index).await?),
                ResourceType::Equipment => print_found(repositories.equipment.get(index).await?),
                other => bail!("no repository for {}", other),
            },
            ["levels", class] => {
                let class = repositories
                    .classes
                    .get(class)
                    .await?
                    .ok_or_else(|| anyhow!("class {} not found", class))?;
                print_json(&repositories.class_levels.levels_for_class(&class).await?)
            }
            ["upgrade-character", path] => {
                let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
                let document = upgrade_character(serde_json::from_str(&raw)?)?;
                print_json(&document)
            }
            ["import-character", slot, path] => {
                let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
                print_json(&characters.import(slot, &raw)?)
            }
            ["import-homebrew", path] => {
                let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
                let count = homebrew.import_entries(&raw)?;
                println!("imported {} homebrew entries", count);
                Ok(())
            }
            ["export-homebrew"] => {
                println!("{}", homebrew.export()?);
                Ok(())
            }
            _ => bail!(
                "usage: charbldr-player <list RESOURCE | get RESOURCE INDEX | levels CLASS | \
                 upgrade-character FILE | import-character SLOT FILE | import-homebrew FILE | export-homebrew>"
            ),
        }
    }

    fn parse_resource(name: &str) -> anyhow::Result<ResourceType> {
        ResourceType::from_str(name).map_err(|e| anyhow!(e))
    }

    fn print_found<T: Serialize>(entity: Option<T>) -> anyhow::Result<()> {
        match entity {
            Some(entity) => print_json(&entity),
            None => bail!("not found"),
        }
    }

    fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::sync::Arc;

    use charbldr_player::infrastructure::http_client::GlooTransport;
    use charbldr_player::infrastructure::platform::{GlooSleep, LocalStorageStore};
    use charbldr_player::infrastructure::{ResponseCache, SrdApiClient, SystemClock};
    use charbldr_player::{HomebrewStore, PlayerConfig, Repositories, RepositoryContext};

    pub async fn run() -> anyhow::Result<()> {
        let config = PlayerConfig::default();
        let store = Arc::new(LocalStorageStore);

        let homebrew = Arc::new(HomebrewStore::load(store.clone(), Arc::new(SystemClock::new()))?);
        let api = Arc::new(SrdApiClient::new(
            config.api_url,
            Arc::new(GlooTransport),
            ResponseCache::new(store),
            Arc::new(GlooSleep),
            config.retry,
        ));
        let repositories = Repositories::new(RepositoryContext::new(api, homebrew));

        let races = repositories.races.get_all().await?;
        tracing::info!(count = races.count(), "Race catalog loaded");
        Ok(())
    }
}
