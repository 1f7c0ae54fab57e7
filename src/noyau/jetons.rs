// src/noyau/jetons.rs
//
// Vocabulaire des touches : opérateurs binaires, fonctions scientifiques, touches.
// Chaque symbole affiché sur le clavier se relit ici (depuis_symbole).

/// Opérateur binaire (un seul en attente à la fois).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Divise,
        Operateur::Fois,
        Operateur::Moins,
        Operateur::Plus,
    ];

    /// Symbole du clavier.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "x",
            Operateur::Divise => "÷",
        }
    }

    /// Accepte aussi les variantes typographiques et clavier PC (− × * /).
    pub fn depuis_symbole(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operateur::Plus),
            "-" | "−" => Some(Operateur::Moins),
            "x" | "×" | "*" => Some(Operateur::Fois),
            "÷" | "/" => Some(Operateur::Divise),
            _ => None,
        }
    }
}

/// Fonctions du panneau scientifique (ensemble fermé).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionScientifique {
    Sin,
    Cos,
    Tan,
    Ln,
    Log10,
    Log2,
    Racine,
    ArcTanDegres,
    Carre,
    Pi,
    E,
}

impl FonctionScientifique {
    /// Ordre du panneau (4 lignes de 3, la dernière incomplète).
    pub const PANNEAU: [[Option<FonctionScientifique>; 3]; 4] = {
        use FonctionScientifique::*;
        [
            [Some(Sin), Some(Cos), Some(Tan)],
            [Some(Ln), Some(Log10), Some(Racine)],
            [Some(Pi), Some(E), Some(Carre)],
            [Some(Log2), Some(ArcTanDegres), None],
        ]
    };

    pub fn symbole(self) -> &'static str {
        match self {
            FonctionScientifique::Sin => "sin",
            FonctionScientifique::Cos => "cos",
            FonctionScientifique::Tan => "tan",
            FonctionScientifique::Ln => "ln",
            FonctionScientifique::Log10 => "log",
            FonctionScientifique::Log2 => "log2",
            FonctionScientifique::Racine => "√",
            FonctionScientifique::ArcTanDegres => "tan⁻¹",
            FonctionScientifique::Carre => "^",
            FonctionScientifique::Pi => "π",
            FonctionScientifique::E => "e",
        }
    }

    pub fn depuis_symbole(s: &str) -> Option<Self> {
        use FonctionScientifique::*;
        let f = match s {
            "sin" => Sin,
            "cos" => Cos,
            "tan" => Tan,
            "ln" => Ln,
            "log" => Log10,
            "log2" => Log2,
            "√" | "sqrt" => Racine,
            "tan⁻¹" | "atan" => ArcTanDegres,
            "^" => Carre,
            "π" | "pi" => Pi,
            "e" => E,
            _ => return None,
        };
        Some(f)
    }

    /// Opérande substitué quand l’entrée ne se lit pas comme un nombre.
    /// None : pas de défaut (constantes, ou carré qui rend "0").
    pub fn defaut(self) -> Option<f64> {
        use FonctionScientifique::*;
        match self {
            Sin | Cos | Tan | Racine | ArcTanDegres => Some(0.0),
            Ln | Log10 | Log2 => Some(1.0),
            Carre | Pi | E => None,
        }
    }
}

/// Une pression de touche, telle que routée vers l’accumulateur.
#[derive(Clone, Debug, PartialEq)]
pub enum Touche {
    /// Chiffre ou séparateur décimal.
    Chiffre(char),
    /// Symbole d’opérateur brut (un symbole inconnu donnera "Error" à l’évaluation).
    Operateur(String),
    Egal,
    Fonction(FonctionScientifique),
    Effacer,
}

impl Touche {
    pub fn operateur(op: Operateur) -> Self {
        Touche::Operateur(op.symbole().to_string())
    }
}
