//! crypto-provider CLI: the `cprov` command.
//!
//! Exercises a provider backend from the shell: key generation, signing,
//! verification, hashing, Diffie-Hellman and random integers. The backend
//! is fixed for the whole invocation by `--backend` or the
//! `CRYPTO_PROVIDER_BACKEND` environment variable.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crypto_provider::config::BACKEND_ENV_VAR;
use crypto_provider::{AsymmetricKey, Backend, IntegerData, Library};

// ── Output helpers ────────────────────────────────────────────────────────────

fn encode(bytes: &[u8], as_base64: bool) -> String {
    if as_base64 {
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, bytes)
    } else {
        hex::encode(bytes)
    }
}

fn decode(text: &str) -> Result<Vec<u8>> {
    let text = text.trim();
    hex::decode(text)
        .or_else(|_| base64::Engine::decode(&base64::engine::general_purpose::STANDARD, text))
        .map_err(|_| anyhow!("expected hex or base64, got {text:?}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// crypto-provider CLI: drive a cryptographic provider backend.
#[derive(Parser, Debug)]
#[command(
    name = "cprov",
    about = "crypto-provider CLI",
    version,
    long_about = "cprov: crypto-provider CLI\n\nGenerate keys, sign and verify, hash, run Diffie-Hellman exchanges\nand draw random integers with the null or dalek backend."
)]
struct Cli {
    /// Provider backend (null, dalek)
    #[arg(long, global = true, env = BACKEND_ENV_VAR, default_value_t = Backend::Dalek)]
    backend: Backend,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print binary values as base64 instead of hex
    #[arg(long, global = true)]
    base64: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show backend parameters
    Info,

    /// Generate a private key and write it to a file
    Keygen {
        /// Derive the key deterministically from this seed
        #[arg(long)]
        seed: Option<String>,

        /// Private key output path
        #[arg(long)]
        out: PathBuf,

        /// Also write the public key here
        #[arg(long)]
        public_out: Option<PathBuf>,
    },

    /// Print (and optionally save) the public half of a private key file
    Pubkey {
        /// Private key file
        #[arg(long)]
        key: PathBuf,

        /// Write the public key here
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Sign a message with a private key file
    Sign {
        /// Private key file
        #[arg(long)]
        key: PathBuf,

        /// Message to sign
        #[arg(long)]
        message: String,
    },

    /// Verify a signature
    Verify {
        /// Key file (public unless --private is given)
        #[arg(long)]
        key: PathBuf,

        /// The key file holds a private key
        #[arg(long)]
        private: bool,

        /// Signed message
        #[arg(long)]
        message: String,

        /// Signature, hex or base64
        #[arg(long)]
        signature: String,
    },

    /// Hash a file or a string
    Hash {
        /// File to hash
        file: Option<PathBuf>,

        /// Hash this string instead of a file
        #[arg(long, conflicts_with = "file")]
        data: Option<String>,
    },

    /// Run a Diffie-Hellman exchange between two local parties
    Dh {
        /// Seed for the first party (fresh when omitted)
        #[arg(long)]
        seed_a: Option<String>,

        /// Seed for the second party (fresh when omitted)
        #[arg(long)]
        seed_b: Option<String>,
    },

    /// Draw random integers
    RandomInt {
        /// Exact number of significant bits
        #[arg(long, conflicts_with_all = ["min", "max"])]
        bits: Option<usize>,

        /// Inclusive lower bound (decimal or 0x-hex)
        #[arg(long, requires = "max")]
        min: Option<String>,

        /// Inclusive upper bound (decimal or 0x-hex)
        #[arg(long, requires = "min")]
        max: Option<String>,

        /// Only return primes
        #[arg(long)]
        prime: bool,

        /// How many values to draw
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lib = cli.backend.library();
    log::debug!("using {} backend", lib.backend());
    let as_base64 = cli.base64;

    let result = match cli.command {
        Commands::Info => cmd_info(lib.as_ref()),
        Commands::Keygen {
            seed,
            out,
            public_out,
        } => cmd_keygen(
            lib.as_ref(),
            seed.as_deref(),
            &out,
            public_out.as_deref(),
            as_base64,
        ),
        Commands::Pubkey { key, out } => cmd_pubkey(lib.as_ref(), &key, out.as_deref(), as_base64),
        Commands::Sign { key, message } => cmd_sign(lib.as_ref(), &key, &message, as_base64),
        Commands::Verify {
            key,
            private,
            message,
            signature,
        } => cmd_verify(lib.as_ref(), &key, private, &message, &signature),
        Commands::Hash { file, data } => {
            cmd_hash(lib.as_ref(), file.as_deref(), data.as_deref(), as_base64)
        }
        Commands::Dh { seed_a, seed_b } => {
            cmd_dh(lib.as_ref(), seed_a.as_deref(), seed_b.as_deref(), as_base64)
        }
        Commands::RandomInt {
            bits,
            min,
            max,
            prime,
            count,
        } => cmd_random_int(lib.as_ref(), bits, min.as_deref(), max.as_deref(), prime, count),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

// ── Command implementations ───────────────────────────────────────────────────

#[derive(Serialize)]
struct InfoReport {
    backend: Backend,
    secure: bool,
    minimum_key_size: usize,
    rng_optimal_seed_size: usize,
    digest_size: usize,
    primality_rounds: usize,
}

/// `cprov info`
fn cmd_info(lib: &dyn Library) -> Result<()> {
    print_json(&InfoReport {
        backend: lib.backend(),
        secure: lib.backend().is_secure(),
        minimum_key_size: lib.minimum_key_size(),
        rng_optimal_seed_size: lib.rng_optimal_seed_size(),
        digest_size: lib.hash_algorithm().digest_size(),
        primality_rounds: lib.primality_rounds(),
    })
}

#[derive(Serialize)]
struct KeyReport {
    algorithm: String,
    key_size: usize,
    public_key: String,
    file: PathBuf,
}

/// `cprov keygen --out PATH [--seed SEED] [--public-out PATH]`
fn cmd_keygen(
    lib: &dyn Library,
    seed: Option<&str>,
    out: &Path,
    public_out: Option<&Path>,
    as_base64: bool,
) -> Result<()> {
    let key = match seed {
        Some(seed) => lib
            .generate_private_key(seed.as_bytes())
            .context("failed to generate key from seed")?,
        None => lib.create_private_key().context("failed to create key")?,
    };

    key.save(out)
        .with_context(|| format!("failed to write {}", out.display()))?;

    let public = key.public_key();
    if let Some(path) = public_out {
        public
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    print_json(&KeyReport {
        algorithm: key.algorithm().to_string(),
        key_size: key.key_size(),
        public_key: encode(&public.to_bytes(), as_base64),
        file: out.to_path_buf(),
    })
}

/// Load a key file and check it belongs to the selected backend.
fn load_key(lib: &dyn Library, path: &Path, private: bool) -> Result<Box<dyn AsymmetricKey>> {
    let (key, kind) = if private {
        (lib.load_private_key_from_file(path), "private")
    } else {
        (lib.load_public_key_from_file(path), "public")
    };
    let key = key.with_context(|| format!("failed to load {kind} key {}", path.display()))?;
    lib.ensure_compatible(key.as_ref())
        .with_context(|| format!("{} cannot be used here", path.display()))?;
    Ok(key)
}

fn load_private(lib: &dyn Library, path: &Path) -> Result<Box<dyn AsymmetricKey>> {
    load_key(lib, path, true)
}

/// `cprov pubkey --key PATH [--out PATH]`
fn cmd_pubkey(lib: &dyn Library, key: &Path, out: Option<&Path>, as_base64: bool) -> Result<()> {
    let public = load_private(lib, key)?.public_key();
    if let Some(path) = out {
        public
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    println!("{}", encode(&public.to_bytes(), as_base64));
    Ok(())
}

/// `cprov sign --key PATH --message TEXT`
fn cmd_sign(lib: &dyn Library, key: &Path, message: &str, as_base64: bool) -> Result<()> {
    let signature = load_private(lib, key)?
        .sign(message.as_bytes())
        .context("signing failed")?;
    println!("{}", encode(&signature, as_base64));
    Ok(())
}

/// `cprov verify --key PATH [--private] --message TEXT --signature SIG`
fn cmd_verify(
    lib: &dyn Library,
    key: &Path,
    private: bool,
    message: &str,
    signature: &str,
) -> Result<()> {
    let key = load_key(lib, key, private)?;
    let signature = decode(signature).context("invalid signature encoding")?;

    if !key.verify(message.as_bytes(), &signature) {
        bail!("signature is invalid");
    }
    println!("valid");
    Ok(())
}

/// `cprov hash [FILE | --data TEXT]`
fn cmd_hash(
    lib: &dyn Library,
    file: Option<&Path>,
    data: Option<&str>,
    as_base64: bool,
) -> Result<()> {
    let input = match (file, data) {
        (Some(path), None) => std::fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, Some(text)) => text.as_bytes().to_vec(),
        _ => bail!("provide either a FILE or --data"),
    };
    let digest = lib.hash_algorithm().hash_data(&input);
    println!("{}", encode(&digest, as_base64));
    Ok(())
}

#[derive(Serialize)]
struct ExchangeReport {
    public_a: String,
    public_b: String,
    shared_secret: String,
    agreed: bool,
}

/// `cprov dh [--seed-a SEED] [--seed-b SEED]`
fn cmd_dh(
    lib: &dyn Library,
    seed_a: Option<&str>,
    seed_b: Option<&str>,
    as_base64: bool,
) -> Result<()> {
    let party = |seed: Option<&str>| match seed {
        Some(seed) => lib.generate_diffie_hellman(seed.as_bytes()),
        None => lib.create_diffie_hellman(),
    };
    let a = party(seed_a).context("failed to set up first party")?;
    let b = party(seed_b).context("failed to set up second party")?;

    let secret_a = a
        .shared_secret(&b.public_component())
        .context("first party failed to derive secret")?;
    let secret_b = b
        .shared_secret(&a.public_component())
        .context("second party failed to derive secret")?;

    let agreed = secret_a == secret_b;
    print_json(&ExchangeReport {
        public_a: encode(&a.public_component(), as_base64),
        public_b: encode(&b.public_component(), as_base64),
        shared_secret: encode(&secret_a, as_base64),
        agreed,
    })?;
    if !agreed {
        bail!("parties derived different secrets");
    }
    Ok(())
}

/// `cprov random-int (--bits N | --min A --max B) [--prime] [--count N]`
fn cmd_random_int(
    lib: &dyn Library,
    bits: Option<usize>,
    min: Option<&str>,
    max: Option<&str>,
    prime: bool,
    count: usize,
) -> Result<()> {
    let bounds = match (min, max) {
        (Some(min), Some(max)) => Some((
            lib.integer_from_str(min).context("invalid --min")?,
            lib.integer_from_str(max).context("invalid --max")?,
        )),
        _ => None,
    };

    let mut values: Vec<IntegerData> = Vec::with_capacity(count);
    for _ in 0..count {
        let value = match (bits, &bounds) {
            (Some(bits), None) => lib.random_integer(bits, prime),
            (None, Some((min, max))) => lib.random_integer_in_range(min, max, prime),
            _ => bail!("provide either --bits or both --min and --max"),
        };
        values.push(value.context("failed to draw integer")?);
    }
    print_json(&values)
}
