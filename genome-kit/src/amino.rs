use std::fmt;

/// All relevant amino acids, plus the alignment gap placeholder...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
  Alanine,       // A
  Arginine,      // R
  Asparagine,    // N
  AsparticAcid,  // D
  Cysteine,      // C
  Glutamine,     // Q
  GlutamicAcid,  // E
  Glycine,       // G
  Histidine,     // H
  Isoleucine,    // I
  Leucine,       // L
  Lysine,        // K
  Methionine,    // M
  Phenylalanine, // F
  Proline,       // P
  Serine,        // S
  Threonine,     // T
  Tryptophan,    // W
  Tyrosine,      // Y
  Valine,        // V
  Asx,           // B (Aspartic Acid or Asparagine)
  Glx,           // Z (Glutamic Acid or Glutamine)
  Unknown,       // X (Unknown or unimportant)
  Stop,          // * (Stop codon)
  Gap,           // - (alignment gap)
}

impl AminoAcid {
  /// Whether this residue is the distinguished alignment gap character.
  #[inline]
  pub const fn is_gap(self) -> bool {
    matches!(self, AminoAcid::Gap)
  }
}

impl From<char> for AminoAcid {
  fn from(c: char) -> Self {
    match c {
      'A' => AminoAcid::Alanine,
      'R' => AminoAcid::Arginine,
      'N' => AminoAcid::Asparagine,
      'D' => AminoAcid::AsparticAcid,
      'C' => AminoAcid::Cysteine,
      'Q' => AminoAcid::Glutamine,
      'E' => AminoAcid::GlutamicAcid,
      'G' => AminoAcid::Glycine,
      'H' => AminoAcid::Histidine,
      'I' => AminoAcid::Isoleucine,
      'L' => AminoAcid::Leucine,
      'K' => AminoAcid::Lysine,
      'M' => AminoAcid::Methionine,
      'F' => AminoAcid::Phenylalanine,
      'P' => AminoAcid::Proline,
      'S' => AminoAcid::Serine,
      'T' => AminoAcid::Threonine,
      'W' => AminoAcid::Tryptophan,
      'Y' => AminoAcid::Tyrosine,
      'V' => AminoAcid::Valine,
      'B' => AminoAcid::Asx,
      'Z' => AminoAcid::Glx,
      'X' => AminoAcid::Unknown,
      '*' => AminoAcid::Stop,
      '-' => AminoAcid::Gap,
      _ => AminoAcid::Unknown, // Default case for invalid characters
    }
  }
}

impl From<AminoAcid> for char {
  fn from(acid: AminoAcid) -> Self {
    match acid {
      AminoAcid::Alanine => 'A',
      AminoAcid::Arginine => 'R',
      AminoAcid::Asparagine => 'N',
      AminoAcid::AsparticAcid => 'D',
      AminoAcid::Cysteine => 'C',
      AminoAcid::Glutamine => 'Q',
      AminoAcid::GlutamicAcid => 'E',
      AminoAcid::Glycine => 'G',
      AminoAcid::Histidine => 'H',
      AminoAcid::Isoleucine => 'I',
      AminoAcid::Leucine => 'L',
      AminoAcid::Lysine => 'K',
      AminoAcid::Methionine => 'M',
      AminoAcid::Phenylalanine => 'F',
      AminoAcid::Proline => 'P',
      AminoAcid::Serine => 'S',
      AminoAcid::Threonine => 'T',
      AminoAcid::Tryptophan => 'W',
      AminoAcid::Tyrosine => 'Y',
      AminoAcid::Valine => 'V',
      AminoAcid::Asx => 'B',
      AminoAcid::Glx => 'Z',
      AminoAcid::Unknown => 'X',
      AminoAcid::Stop => '*',
      AminoAcid::Gap => '-',
    }
  }
}

impl fmt::Display for AminoAcid {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", char::from(*self))
  }
}
