//! Bundled periodic table: symbol, name, atomic number and standard mass [amu].

use super::elements::ElementRecord;

pub(crate) const MAX_ATOMIC_NUMBER: u32 = 112;

pub(crate) const ELEMENT_RECORDS: [ElementRecord; MAX_ATOMIC_NUMBER as usize] = [
    ElementRecord::new("H", "Hydrogen", 1, 1.008),
    ElementRecord::new("He", "Helium", 2, 4.0026),
    ElementRecord::new("Li", "Lithium", 3, 6.941),
    ElementRecord::new("Be", "Beryllium", 4, 9.0122),
    ElementRecord::new("B", "Boron", 5, 10.811),
    ElementRecord::new("C", "Carbon", 6, 12.011),
    ElementRecord::new("N", "Nitrogen", 7, 14.007),
    ElementRecord::new("O", "Oxygen", 8, 15.999),
    ElementRecord::new("F", "Fluorine", 9, 18.998),
    ElementRecord::new("Ne", "Neon", 10, 20.18),
    ElementRecord::new("Na", "Sodium", 11, 22.99),
    ElementRecord::new("Mg", "Magnesium", 12, 24.305),
    ElementRecord::new("Al", "Aluminium", 13, 26.982),
    ElementRecord::new("Si", "Silicon", 14, 28.086),
    ElementRecord::new("P", "Phosphorus", 15, 30.974),
    ElementRecord::new("S", "Sulfur", 16, 32.065),
    ElementRecord::new("Cl", "Chlorine", 17, 35.453),
    ElementRecord::new("Ar", "Argon", 18, 39.948),
    ElementRecord::new("K", "Potassium", 19, 39.098),
    ElementRecord::new("Ca", "Calcium", 20, 40.078),
    ElementRecord::new("Sc", "Scandium", 21, 44.956),
    ElementRecord::new("Ti", "Titanium", 22, 47.867),
    ElementRecord::new("V", "Vanadium", 23, 50.942),
    ElementRecord::new("Cr", "Chromium", 24, 51.996),
    ElementRecord::new("Mn", "Manganese", 25, 54.938),
    ElementRecord::new("Fe", "Iron", 26, 55.845),
    ElementRecord::new("Co", "Cobalt", 27, 58.933),
    ElementRecord::new("Ni", "Nickel", 28, 58.693),
    ElementRecord::new("Cu", "Copper", 29, 63.546),
    ElementRecord::new("Zn", "Zinc", 30, 65.38),
    ElementRecord::new("Ga", "Gallium", 31, 69.723),
    ElementRecord::new("Ge", "Germanium", 32, 72.64),
    ElementRecord::new("As", "Arsenic", 33, 74.922),
    ElementRecord::new("Se", "Selenium", 34, 78.96),
    ElementRecord::new("Br", "Bromine", 35, 79.904),
    ElementRecord::new("Kr", "Krypton", 36, 83.798),
    ElementRecord::new("Rb", "Rubidium", 37, 85.468),
    ElementRecord::new("Sr", "Strontium", 38, 87.62),
    ElementRecord::new("Y", "Yttrium", 39, 88.906),
    ElementRecord::new("Zr", "Zirconium", 40, 91.224),
    ElementRecord::new("Nb", "Niobium", 41, 92.906),
    ElementRecord::new("Mo", "Molybdenum", 42, 95.96),
    ElementRecord::new("Tc", "Technetium", 43, 98.0),
    ElementRecord::new("Ru", "Ruthenium", 44, 101.07),
    ElementRecord::new("Rh", "Rhodium", 45, 102.91),
    ElementRecord::new("Pd", "Palladium", 46, 106.42),
    ElementRecord::new("Ag", "Silver", 47, 107.87),
    ElementRecord::new("Cd", "Cadmium", 48, 112.41),
    ElementRecord::new("In", "Indium", 49, 114.82),
    ElementRecord::new("Sn", "Tin", 50, 118.71),
    ElementRecord::new("Sb", "Antimony", 51, 121.76),
    ElementRecord::new("Te", "Tellurium", 52, 127.6),
    ElementRecord::new("I", "Iodine", 53, 126.9),
    ElementRecord::new("Xe", "Xenon", 54, 131.293),
    ElementRecord::new("Cs", "Caesium", 55, 132.91),
    ElementRecord::new("Ba", "Barium", 56, 137.33),
    ElementRecord::new("La", "Lanthanum", 57, 138.91),
    ElementRecord::new("Ce", "Cerium", 58, 140.12),
    ElementRecord::new("Pr", "Praseodymium", 59, 140.91),
    ElementRecord::new("Nd", "Neodymium", 60, 144.24),
    ElementRecord::new("Pm", "Promethium", 61, 145.0),
    ElementRecord::new("Sm", "Samarium", 62, 150.36),
    ElementRecord::new("Eu", "Europium", 63, 151.96),
    ElementRecord::new("Gd", "Gadolinium", 64, 157.25),
    ElementRecord::new("Tb", "Terbium", 65, 158.93),
    ElementRecord::new("Dy", "Dysprosium", 66, 162.5),
    ElementRecord::new("Ho", "Holmium", 67, 164.93),
    ElementRecord::new("Er", "Erbium", 68, 167.26),
    ElementRecord::new("Tm", "Thulium", 69, 168.93),
    ElementRecord::new("Yb", "Ytterbium", 70, 173.05),
    ElementRecord::new("Lu", "Lutetium", 71, 174.97),
    ElementRecord::new("Hf", "Hafnium", 72, 178.49),
    ElementRecord::new("Ta", "Tantalum", 73, 180.95),
    ElementRecord::new("W", "Tungsten", 74, 183.84),
    ElementRecord::new("Re", "Rhenium", 75, 186.21),
    ElementRecord::new("Os", "Osmium", 76, 190.23),
    ElementRecord::new("Ir", "Iridium", 77, 192.22),
    ElementRecord::new("Pt", "Platinum", 78, 195.08),
    ElementRecord::new("Au", "Gold", 79, 196.966995239),
    ElementRecord::new("Hg", "Mercury", 80, 200.59),
    ElementRecord::new("Tl", "Thallium", 81, 204.38),
    ElementRecord::new("Pb", "Lead", 82, 207.2),
    ElementRecord::new("Bi", "Bismuth", 83, 208.98),
    ElementRecord::new("Po", "Polonium", 84, 209.0),
    ElementRecord::new("At", "Astatine", 85, 210.0),
    ElementRecord::new("Rn", "Radon", 86, 222.0),
    ElementRecord::new("Fr", "Francium", 87, 223.0),
    ElementRecord::new("Ra", "Radium", 88, 226.0),
    ElementRecord::new("Ac", "Actinium", 89, 227.0),
    ElementRecord::new("Th", "Thorium", 90, 232.04),
    ElementRecord::new("Pa", "Protactinium", 91, 231.04),
    ElementRecord::new("U", "Uranium", 92, 238.03),
    ElementRecord::new("Np", "Neptunium", 93, 237.0),
    ElementRecord::new("Pu", "Plutonium", 94, 244.0),
    ElementRecord::new("Am", "Americium", 95, 243.0),
    ElementRecord::new("Cm", "Curium", 96, 247.0),
    ElementRecord::new("Bk", "Berkelium", 97, 247.0),
    ElementRecord::new("Cf", "Californium", 98, 251.0),
    ElementRecord::new("Es", "Einsteinium", 99, 252.0),
    ElementRecord::new("Fm", "Fermium", 100, 257.0),
    ElementRecord::new("Md", "Mendelevium", 101, 258.0),
    ElementRecord::new("No", "Nobelium", 102, 259.0),
    ElementRecord::new("Lr", "Lawrencium", 103, 262.0),
    ElementRecord::new("Rf", "Rutherfordium", 104, 267.0),
    ElementRecord::new("Db", "Dubnium", 105, 268.0),
    ElementRecord::new("Sg", "Seaborgium", 106, 271.0),
    ElementRecord::new("Bh", "Bohrium", 107, 272.0),
    ElementRecord::new("Hs", "Hassium", 108, 270.0),
    ElementRecord::new("Mt", "Meitnerium", 109, 276.0),
    ElementRecord::new("Ds", "Darmstadtium", 110, 281.0),
    ElementRecord::new("Rg", "Roentgenium", 111, 280.0),
    ElementRecord::new("Cn", "Copernicium", 112, 285.0),
];
