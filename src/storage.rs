//! Persistent storage for the counter values.
//!
//! The record is a raw image of the eight counters: 8 × `i32`,
//! little-endian, no header, version or checksum (32 bytes).
//!
//! On the device it lives in the nRF52840's internal flash via the
//! `sequential-storage` map, under a single fixed key, so each save
//! replaces the previous record and the crate handles wear levelling.

use core::future::Future;
use core::ops::Range;

use embedded_storage_async::nor_flash::NorFlash;
use sequential_storage::cache::NoCache;

use crate::config::{
    COLUMN_COUNT, COUNTER_RECORD_KEY, STORAGE_FLASH_PAGE_COUNT, STORAGE_FLASH_PAGE_START,
};
use crate::error::Error;
use crate::state::Counts;

/// Flash page size for nRF52840 (4 KB).
const FLASH_PAGE_SIZE: u32 = 4096;

/// Start address of our storage region.
const STORAGE_START: u32 = STORAGE_FLASH_PAGE_START * FLASH_PAGE_SIZE;

/// End address (exclusive) of our storage region.
const STORAGE_END: u32 = (STORAGE_FLASH_PAGE_START + STORAGE_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

/// Size of one stored counter value.
const VALUE_SIZE: usize = core::mem::size_of::<i32>();

/// Size of the counter record in bytes.
pub const RECORD_SIZE: usize = COLUMN_COUNT * VALUE_SIZE;

/// Scratch buffer for sequential-storage (key + record + item padding).
const ITEM_BUFFER_SIZE: usize = 128;

/// Serialise the counters into the raw record layout.
pub fn encode(counts: &Counts) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    for (chunk, value) in buf.chunks_exact_mut(VALUE_SIZE).zip(counts) {
        chunk.copy_from_slice(&value.to_le_bytes());
    }
    buf
}

/// Parse a raw record.
///
/// Values are taken as-is, including ones outside `0..=MAX_COUNT`. A
/// record of any length other than [`RECORD_SIZE`] is rejected.
pub fn decode(data: &[u8]) -> Result<Counts, Error> {
    if data.len() != RECORD_SIZE {
        return Err(Error::RecordSize(data.len()));
    }

    let mut counts = [0i32; COLUMN_COUNT];
    for (value, chunk) in counts.iter_mut().zip(data.chunks_exact(VALUE_SIZE)) {
        *value = i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(counts)
}

/// Somewhere the counter record can be saved and loaded.
pub trait CounterStore {
    /// Read the stored record.
    ///
    /// Returns `Ok(None)` if nothing has been saved yet.
    fn load(&mut self) -> impl Future<Output = Result<Option<Counts>, Error>>;

    /// Replace the stored record with `counts`.
    fn save(&mut self, counts: &Counts) -> impl Future<Output = Result<(), Error>>;
}

/// Counter record kept in NOR flash through `sequential-storage`.
pub struct FlashStore<F> {
    flash: F,
    range: Range<u32>,
}

impl<F: NorFlash> FlashStore<F> {
    /// Store in the reserved region from [`crate::config`].
    pub fn new(flash: F) -> Self {
        Self::with_range(flash, STORAGE_START..STORAGE_END)
    }

    /// Store in a caller-chosen region (must span at least two erase pages).
    pub fn with_range(flash: F, range: Range<u32>) -> Self {
        Self { flash, range }
    }

    pub fn into_inner(self) -> F {
        self.flash
    }
}

impl<F: NorFlash> CounterStore for FlashStore<F> {
    async fn load(&mut self) -> Result<Option<Counts>, Error> {
        let mut buf = [0u8; ITEM_BUFFER_SIZE];

        match sequential_storage::map::fetch_item::<u8, &[u8], _>(
            &mut self.flash,
            self.range.clone(),
            &mut NoCache::new(),
            &mut buf,
            &COUNTER_RECORD_KEY,
        )
        .await
        {
            Ok(Some(data)) => match decode(data) {
                Ok(counts) => {
                    debug!("Loaded counter record");
                    Ok(Some(counts))
                }
                Err(e) => {
                    warn!("Ignoring counter record: {:?}", e);
                    Err(e)
                }
            },
            Ok(None) => {
                info!("No counter record in flash");
                Ok(None)
            }
            Err(_) => {
                error!("Flash read error");
                Err(Error::Storage)
            }
        }
    }

    async fn save(&mut self, counts: &Counts) -> Result<(), Error> {
        let mut buf = [0u8; ITEM_BUFFER_SIZE];
        let record = encode(counts);
        let item: &[u8] = &record;

        match sequential_storage::map::store_item::<u8, &[u8], _>(
            &mut self.flash,
            self.range.clone(),
            &mut NoCache::new(),
            &mut buf,
            &COUNTER_RECORD_KEY,
            &item,
        )
        .await
        {
            Ok(_) => {
                debug!("Saved counter record");
                Ok(())
            }
            Err(_) => {
                error!("Flash write error");
                Err(Error::Storage)
            }
        }
    }
}
