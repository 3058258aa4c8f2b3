use clap::{Parser, Subcommand, ValueEnum};
use discogs::{
    Credentials, Discogs, FolderArgs, OAuthClient, OAuthSigner, Options, Pagination,
    SearchRequest, SignatureMethod, SortOrder,
};
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "discogs-cli")]
#[command(about = "CLI for the Discogs database and collection API", long_about = None)]
struct Cli {
    /// User agent sent with every request (required by Discogs)
    #[arg(long, env = "DISCOGS_USER_AGENT", default_value = "discogs-cli/0.1")]
    user_agent: String,

    /// Personal access token
    #[arg(long, env = "DISCOGS_TOKEN")]
    token: Option<String>,

    /// Marketplace currency code (USD, EUR, GBP, ...)
    #[arg(long, env = "DISCOGS_CURRENCY", default_value = "")]
    currency: String,

    /// API endpoint
    #[arg(long, env = "DISCOGS_URL", default_value = discogs::config::DISCOGS_API)]
    url: String,

    /// OAuth consumer key
    #[arg(long, env = "DISCOGS_CONSUMER_KEY")]
    consumer_key: Option<String>,

    /// OAuth consumer secret
    #[arg(long, env = "DISCOGS_CONSUMER_SECRET")]
    consumer_secret: Option<String>,

    /// OAuth access token
    #[arg(long, env = "DISCOGS_OAUTH_TOKEN")]
    oauth_token: Option<String>,

    /// OAuth access token secret
    #[arg(long, env = "DISCOGS_OAUTH_SECRET")]
    oauth_secret: Option<String>,

    /// Sign with PLAINTEXT instead of HMAC-SHA1
    #[arg(long)]
    plaintext: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct PageArgs {
    /// Page number
    #[arg(long)]
    page: Option<u32>,

    /// Items per page
    #[arg(long)]
    per_page: Option<u32>,

    /// Sort key
    #[arg(long)]
    sort: Option<String>,

    /// Sort order
    #[arg(long, value_enum)]
    sort_order: Option<Order>,
}

impl PageArgs {
    fn pagination(&self) -> Option<Pagination> {
        if self.page.is_none()
            && self.per_page.is_none()
            && self.sort.is_none()
            && self.sort_order.is_none()
        {
            return None;
        }
        Some(Pagination {
            page: self.page,
            per_page: self.per_page,
            sort: self.sort.clone(),
            sort_order: self.sort_order.map(Into::into),
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show a release
    Release { id: u64 },
    /// Show the community rating of a release
    Rating { id: u64 },
    /// Show an artist
    Artist { id: u64 },
    /// List an artist's releases
    ArtistReleases {
        id: u64,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show a label
    Label { id: u64 },
    /// List a label's releases
    LabelReleases {
        id: u64,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show a master release
    Master { id: u64 },
    /// List the versions of a master release
    MasterVersions {
        id: u64,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Search the database
    Search {
        /// Search query
        query: String,

        /// Restrict results to one kind of entity
        #[arg(short, long, value_enum)]
        r#type: Option<Kind>,

        /// Filter by artist name
        #[arg(long)]
        artist: Option<String>,

        /// Filter by year
        #[arg(long)]
        year: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Show the user behind the OAuth credentials
    Identity,
    /// List a user's collection folders
    Folders { username: String },
    /// Show one collection folder
    Folder { username: String, id: u64 },
    /// List the releases in a collection folder
    FolderReleases {
        username: String,
        id: u64,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Kind {
    Release,
    Master,
    Artist,
    Label,
}

impl From<Kind> for discogs::SearchType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Release => discogs::SearchType::Release,
            Kind::Master => discogs::SearchType::Master,
            Kind::Artist => discogs::SearchType::Artist,
            Kind::Label => discogs::SearchType::Label,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Order {
    Asc,
    Desc,
}

impl From<Order> for SortOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Asc => SortOrder::Asc,
            Order::Desc => SortOrder::Desc,
        }
    }
}

fn print<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn signer(cli: &Cli) -> Option<OAuthSigner> {
    match (
        &cli.consumer_key,
        &cli.consumer_secret,
        &cli.oauth_token,
        &cli.oauth_secret,
    ) {
        (Some(key), Some(secret), Some(token), Some(token_secret)) => {
            let method = if cli.plaintext {
                SignatureMethod::Plaintext
            } else {
                SignatureMethod::HmacSha1
            };
            Some(OAuthSigner::new(
                OAuthClient::new(key, secret).with_signature_method(method),
                Credentials::new(token, token_secret),
            ))
        }
        (None, None, None, None) => None,
        _ => {
            warn!("Incomplete OAuth credentials, collection and identity calls will fail");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let options = Options {
        url: cli.url.clone(),
        currency: cli.currency.clone(),
        user_agent: cli.user_agent.clone(),
        token: cli.token.clone(),
    };
    let mut client = Discogs::new(&options)?;
    if let Some(signer) = signer(&cli) {
        client = client.with_oauth(signer);
    }

    let database = client.database();
    match &cli.command {
        Commands::Release { id } => print(&database.release(*id).await?)?,
        Commands::Rating { id } => print(&database.release_rating(*id).await?)?,
        Commands::Artist { id } => print(&database.artist(*id).await?)?,
        Commands::ArtistReleases { id, page } => print(
            &database
                .artist_releases(*id, page.pagination().as_ref())
                .await?,
        )?,
        Commands::Label { id } => print(&database.label(*id).await?)?,
        Commands::LabelReleases { id, page } => print(
            &database
                .label_releases(*id, page.pagination().as_ref())
                .await?,
        )?,
        Commands::Master { id } => print(&database.master(*id).await?)?,
        Commands::MasterVersions { id, page } => print(
            &database
                .master_versions(*id, page.pagination().as_ref())
                .await?,
        )?,
        Commands::Search {
            query,
            r#type,
            artist,
            year,
            page,
        } => {
            let mut request = SearchRequest::query(query.as_str());
            if let Some(kind) = r#type {
                request = request.kind((*kind).into());
            }
            if let Some(artist) = artist {
                request = request.artist(artist.as_str());
            }
            if let Some(year) = year {
                request = request.year(year.as_str());
            }
            print(
                &client
                    .search()
                    .search(&request, page.pagination().as_ref())
                    .await?,
            )?
        }
        Commands::Identity => print(&client.user().identity().await?)?,
        Commands::Folders { username } => print(&client.collection().folders(username).await?)?,
        Commands::Folder { username, id } => print(
            &client
                .collection()
                .folder(&FolderArgs::new(username.as_str(), *id))
                .await?,
        )?,
        Commands::FolderReleases { username, id, page } => print(
            &client
                .collection()
                .folder_releases(
                    &FolderArgs::new(username.as_str(), *id),
                    page.pagination().as_ref(),
                )
                .await?,
        )?,
    }

    Ok(())
}
