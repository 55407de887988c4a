//! Token table loader: bulk insert that skips rows already present

use chrono::Utc;
use rusqlite::{params, Connection};
use serde::Deserialize;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

use crate::shared::errors::StoreError;
use crate::shared::utils::normalize_address;

/// Token row to load
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewToken {
    pub chain_id: u64,
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
}

impl NewToken {
    /// Natural key column value, "{chain_id}:{address}"
    pub fn id(&self) -> String {
        format!("{}:{}", self.chain_id, self.normalized_address())
    }

    fn normalized_address(&self) -> String {
        normalize_address(&self.address).unwrap_or_else(|| self.address.trim().to_lowercase())
    }
}

pub struct TokenStore {
    conn: Arc<Mutex<Connection>>,
}

impl TokenStore {
    /// Open (or create) the database and ensure the schema
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.create_tables()?;
        Ok(store)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    fn create_tables(&self) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS tokens (
                id TEXT PRIMARY KEY,
                chain_id INTEGER NOT NULL,
                address TEXT NOT NULL,
                symbol TEXT NOT NULL,
                name TEXT NOT NULL,
                decimals INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                UNIQUE(chain_id, address)
            );
            CREATE INDEX IF NOT EXISTS idx_tokens_chain ON tokens(chain_id);
            "#,
        )?;
        Ok(())
    }

    /// Insert all tokens in one transaction, ignoring rows whose natural key
    /// already exists. Returns the number of rows actually created.
    pub fn create_tokens(&self, tokens: &[NewToken]) -> Result<usize, StoreError> {
        if tokens.is_empty() {
            return Ok(0);
        }

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let created_at = Utc::now().to_rfc3339();
        let mut created = 0;
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO tokens (id, chain_id, address, symbol, name, decimals, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for token in tokens {
                created += stmt.execute(params![
                    token.id(),
                    token.chain_id as i64,
                    token.normalized_address(),
                    token.symbol,
                    token.name,
                    token.decimals,
                    created_at,
                ])?;
            }
        }
        tx.commit()?;

        if created > 0 {
            info!("LOAD - Created {} tokens.", created);
        } else {
            debug!("LOAD - No new tokens among {} rows", tokens.len());
        }
        Ok(created)
    }

    /// Total stored tokens
    pub fn count(&self) -> Result<u64, StoreError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM tokens", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(chain_id: u64, address: &str, symbol: &str) -> NewToken {
        NewToken {
            chain_id,
            address: address.to_string(),
            symbol: symbol.to_string(),
            name: format!("{} Token", symbol),
            decimals: 18,
        }
    }

    #[test]
    fn test_empty_input_is_noop() {
        let store = TokenStore::open_in_memory().unwrap();
        assert_eq!(store.create_tokens(&[]).unwrap(), 0);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_duplicates_are_skipped() {
        let store = TokenStore::open_in_memory().unwrap();
        let weth = token(1, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", "WETH");
        let usdc = token(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", "USDC");

        assert_eq!(store.create_tokens(&[weth.clone(), usdc.clone()]).unwrap(), 2);
        assert_eq!(store.create_tokens(&[weth.clone()]).unwrap(), 0);

        // Same address, different case, is the same natural key
        let shouting = token(1, "0xC02AAA39B223FE8D0A0E5C4F27EAD9083C756CC2", "WETH");
        assert_eq!(store.create_tokens(&[shouting]).unwrap(), 0);

        // Same address on another chain is a new row
        let bridged = token(42161, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", "WETH");
        assert_eq!(store.create_tokens(&[bridged, weth]).unwrap(), 1);

        assert_eq!(store.count().unwrap(), 3);
    }

    #[test]
    fn test_duplicates_within_batch() {
        let store = TokenStore::open_in_memory().unwrap();
        let dai = token(1, "0x6B175474E89094C44Da98b954EedeAC495271d0F", "DAI");
        assert_eq!(store.create_tokens(&[dai.clone(), dai]).unwrap(), 1);
    }

    #[test]
    fn test_token_json_shape() {
        let tokens: Vec<NewToken> = serde_json::from_str(
            r#"[{"chainId":137,"address":"0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270","symbol":"WMATIC","name":"Wrapped Matic","decimals":18}]"#,
        )
        .unwrap();
        assert_eq!(tokens[0].id(), "137:0x0d500b1d8e8ef31e21c99d1db9a6444d3adf1270");
    }
}
