extern crate miette;
extern crate thiserror;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum SearchError {
    #[error("known prefix is longer than the ciphertext ({prefix:?} > {ciphertext:?} bytes)")]
    #[diagnostic(code(libxorseek::prefix_length_error))]
    PrefixTooLong { prefix: usize, ciphertext: usize },

    #[error("ciphertext is longer than a derivable keystream (must be at most {maximum:?} bytes, received {received:?})")]
    #[diagnostic(code(libxorseek::keystream_length_error))]
    CiphertextTooLong { maximum: usize, received: usize },
}
