//! Size rule contract tests
//!
//! - Text file: number of characters in its content
//! - Folder and drive: sum of children
//! - Zip file: half the sum of children, rounded by the configured mode
