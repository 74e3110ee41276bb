/*!
# IO utilities

Saving of harvested corpora.
!*/
pub mod writer;
