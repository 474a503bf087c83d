//! Hardware capability queries

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
cpufeatures::new!(cpuid_aes, "aes");

/// Returns true when the CPU exposes AES instructions (AES-NI)
///
/// The wrapped `aes` crate performs the same detection internally and picks
/// the accelerated implementation on its own; this query only reports what
/// that selection will find.
pub fn aes_ni_available() -> bool {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        cpuid_aes::get()
    }
    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    {
        false
    }
}
