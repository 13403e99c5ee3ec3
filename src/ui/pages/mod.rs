pub mod explore;

pub use explore::ExplorePage;
