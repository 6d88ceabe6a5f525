use crate::domain::speech::{AudioClip, SynthesizedAudio};
use chrono::Utc;
use moka::future::Cache;
use std::time::Duration;
use uuid::Uuid;

/// In-memory store of synthesized audio, keyed by a random clip id.
///
/// Entries expire `ttl` after insertion; beyond `capacity` entries the cache
/// evicts on its own policy.
pub struct AudioClipRepository {
    clips: Cache<Uuid, AudioClip>,
}

impl AudioClipRepository {
    pub fn new(ttl: Duration, capacity: u64) -> Self {
        let clips = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();

        Self { clips }
    }

    pub async fn store(&self, audio: SynthesizedAudio) -> AudioClip {
        let clip = AudioClip {
            id: Uuid::new_v4(),
            audio,
            created_at: Utc::now(),
        };
        self.clips.insert(clip.id, clip.clone()).await;
        clip
    }

    pub async fn find(&self, clip_id: Uuid) -> Option<AudioClip> {
        self.clips.get(&clip_id).await
    }

    /// Returns `true` if a live clip was removed
    ///
    /// Expired clips may still sit in the cache until the next maintenance
    /// run; they count as unknown here, same as in [`Self::find`].
    pub async fn remove(&self, clip_id: Uuid) -> bool {
        if self.clips.get(&clip_id).await.is_none() {
            return false;
        }
        self.clips.remove(&clip_id).await.is_some()
    }

    pub async fn count(&self) -> u64 {
        self.clips.run_pending_tasks().await;
        self.clips.entry_count()
    }
}
