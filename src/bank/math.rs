//! Math/physics templates: literal, computable exercises only.

use super::{Band, McTemplate, MsTemplate, TfTemplate};

// 1ro-2do básico: sums and differences up to 20.
const TF_L1: &[TfTemplate] = &[
  tf!("5 + 3 = 8", true),
  tf!("7 + 2 = 10", false, "7 + 2 = 9."),
  tf!("10 - 4 = 6", true),
  tf!("8 - 3 = 4", false, "8 - 3 = 5."),
  tf!("6 + 4 = 10", true),
  tf!("9 - 5 = 4", true),
  tf!("3 + 5 = 9", false, "3 + 5 = 8."),
  tf!("12 - 7 = 5", true),
  tf!("4 + 4 = 8", true),
  tf!("15 - 8 = 6", false, "15 - 8 = 7."),
  tf!("2 + 9 = 11", true),
  tf!("11 - 6 = 5", true),
];

const MC_L1: &[McTemplate] = &[
  mc!("¿Cuánto es 5 + 4?", ["7", "8", "9", "10"], 2),
  mc!("¿Cuánto es 8 - 3?", ["4", "5", "6", "7"], 1),
  mc!("Si tienes 6 manzanas y te dan 3 más, ¿cuántas tienes?", ["7", "8", "9", "10"], 2),
  mc!("Tienes 10 lápices y regalas 4. ¿Cuántos te quedan?", ["5", "6", "7", "8"], 1),
  mc!("¿Cuánto es 7 + 5?", ["10", "11", "12", "13"], 2),
  mc!("¿Cuánto es 15 - 7?", ["6", "7", "8", "9"], 2),
  mc!("Si hay 4 pájaros y llegan 6 más, ¿cuántos hay?", ["8", "9", "10", "11"], 2),
  mc!("¿Cuánto es 9 + 2?", ["10", "11", "12", "13"], 1),
];

const MS_L1: &[MsTemplate] = &[
  ms!("Selecciona TODAS las sumas que dan 10:", ["5 + 5" => true, "7 + 3" => true, "6 + 3" => false, "8 + 2" => true]),
  ms!("¿Cuáles restas dan como resultado 5?", ["10 - 5" => true, "8 - 3" => true, "9 - 3" => false, "7 - 2" => true]),
  ms!("Selecciona los números mayores que 5:", ["7" => true, "3" => false, "9" => true, "4" => false]),
  ms!("¿Cuáles sumas dan un resultado mayor que 10?", ["6 + 6" => true, "5 + 4" => false, "8 + 5" => true, "7 + 2" => false]),
];

// 3ro-4to básico: up to 1000, simple multiplication.
const TF_L2: &[TfTemplate] = &[
  tf!("45 + 28 = 73", true),
  tf!("67 - 39 = 28", true),
  tf!("5 × 6 = 30", true),
  tf!("8 × 7 = 54", false, "8 × 7 = 56."),
  tf!("124 + 56 = 180", true),
  tf!("200 - 75 = 125", true),
  tf!("9 × 4 = 36", true),
  tf!("7 × 9 = 54", false, "7 × 9 = 63."),
  tf!("150 + 250 = 400", true),
  tf!("6 × 6 = 36", true),
];

const MC_L2: &[McTemplate] = &[
  mc!("¿Cuánto es 45 + 28?", ["63", "73", "83", "53"], 1),
  mc!("¿Cuánto es 100 - 36?", ["54", "64", "74", "84"], 1),
  mc!("¿Cuánto es 6 × 7?", ["35", "42", "48", "49"], 1),
  mc!("Si tienes 120 caramelos y das 45, ¿cuántos quedan?", ["65", "75", "85", "95"], 1),
  mc!("¿Cuánto es 8 × 9?", ["63", "72", "81", "64"], 1),
  mc!("¿Cuánto es 250 + 175?", ["415", "425", "435", "325"], 1),
];

const MS_L2: &[MsTemplate] = &[
  ms!("Selecciona TODAS las operaciones que dan 100:", ["50 + 50" => true, "75 + 25" => true, "60 + 30" => false, "10 × 10" => true]),
  ms!("¿Cuáles números son pares?", ["24" => true, "37" => false, "58" => true, "46" => true]),
  ms!("Selecciona las multiplicaciones que dan más de 50:", ["8 × 7" => true, "6 × 6" => false, "9 × 8" => true, "7 × 5" => false]),
];

// 5to-6to básico: fractions and decimals.
const TF_L3: &[TfTemplate] = &[
  tf!("1/2 + 1/4 = 3/4", true),
  tf!("0.5 + 0.25 = 0.75", true),
  tf!("2/3 es mayor que 1/2", true),
  tf!("0.8 es menor que 0.75", false, "0.8 = 0.80, que es mayor que 0.75."),
  tf!("3/4 = 0.75", true),
  tf!("234 × 10 = 2340", true),
  tf!("1/3 + 1/3 = 2/3", true),
  tf!("500 ÷ 5 = 100", true),
];

const MC_L3: &[McTemplate] = &[
  mc!("¿Cuánto es 1/2 + 1/4?", ["1/2", "2/4", "3/4", "1"], 2),
  mc!("¿Cuánto es 0.5 + 0.3?", ["0.7", "0.8", "0.9", "1.0"], 1),
  mc!("¿Qué fracción es mayor: 1/3, 1/2, 1/4 o 1/5?", ["1/3", "1/2", "1/4", "1/5"], 1),
  mc!("¿Cuánto es 3.5 × 2?", ["5.5", "6.0", "6.5", "7.0"], 3),
  mc!("¿Cuánto es 150 ÷ 5?", ["25", "30", "35", "40"], 1),
];

// 7mo básico onwards.
const TF_L45: &[TfTemplate] = &[
  tf!("Si un producto cuesta $80 y tiene 25% de descuento, el precio final es $60.", true),
  tf!("El perímetro de un rectángulo de 10cm x 5cm es 30cm.", true),
  tf!("Si 3x = 27, entonces x = 9.", true),
  tf!("El área de un cuadrado de lado 8cm es 64cm².", true),
  tf!("El 20% de 150 es igual a 30.", true),
  tf!("La fracción 3/4 es mayor que 2/3.", true),
];

const MC_L45: &[McTemplate] = &[
  mc!("¿Cuál es el 25% de 200?", ["40", "50", "60", "75"], 1),
  mc!("Si x + 15 = 42, entonces x =", ["17", "27", "37", "57"], 1),
  mc!("El área de un rectángulo de 8×5 es:", ["30", "35", "40", "45"], 2),
  mc!("¿Cuánto es (-5) + 8?", ["3", "-3", "13", "-13"], 0),
];

const MS_L35: &[MsTemplate] = &[
  ms!("Selecciona las fracciones equivalentes a 1/2:", ["2/4" => true, "3/6" => true, "2/3" => false, "4/8" => true]),
  ms!("¿Cuáles números son divisibles por 5?", ["25" => true, "32" => false, "40" => true, "55" => true]),
  ms!("Selecciona los números mayores que 0.5:", ["0.75" => true, "0.3" => false, "0.8" => true, "0.25" => false]),
];

// Shared word problems and operations for levels 3-5.
const TF_WORDS: &[TfTemplate] = &[
  tf!("El resultado de 15 + 27 es igual a 42", true, "15 + 27 = 42. La suma es correcta."),
  tf!("El resultado de 8 × 7 es igual a 56", true, "8 × 7 = 56. La multiplicación es correcta."),
  tf!("El resultado de 144 ÷ 12 es igual a 12", true, "144 ÷ 12 = 12. La división es correcta."),
  tf!("El resultado de 100 - 37 es igual a 63", true, "100 - 37 = 63. La resta es correcta."),
  tf!("Si 4x = 20, entonces x = 5", true, "Para encontrar x: x = 20 ÷ 4 = 5."),
  tf!("El resultado de 3² + 4² es igual a 25", true, "3² + 4² = 9 + 16 = 25. Es el teorema de Pitágoras para 3-4-5."),
  tf!("La mitad de 84 es 42", true, "84 ÷ 2 = 42. La división es correcta."),
  tf!("El doble de 35 es 70", true, "35 × 2 = 70. La multiplicación es correcta."),
  tf!("El resultado de 25% de 80 es 20", true, "25% de 80 = 80 × 0.25 = 20."),
  tf!("El resultado de 1/2 + 1/4 es igual a 3/4", true, "1/2 + 1/4 = 2/4 + 1/4 = 3/4."),
  tf!("El resultado de 9 × 8 es igual a 63", false, "9 × 8 = 72, no 63."),
  tf!("El resultado de 56 ÷ 7 es igual a 9", false, "56 ÷ 7 = 8, no 9."),
  tf!("El resultado de 45 + 38 es igual a 73", false, "45 + 38 = 83, no 73."),
  tf!("Si 5x = 30, entonces x = 7", false, "Si 5x = 30, entonces x = 30 ÷ 5 = 6, no 7."),
  tf!("El resultado de 2³ es igual a 6", false, "2³ = 2 × 2 × 2 = 8, no 6."),
  tf!("El 50% de 60 es 25", false, "50% de 60 = 60 × 0.5 = 30, no 25."),
  tf!("El triple de 15 es 50", false, "15 × 3 = 45, no 50."),
  tf!("El resultado de 1/3 + 1/3 es igual a 2/6", false, "1/3 + 1/3 = 2/3, no 2/6."),
  tf!("El cuadrado de 7 es 45", false, "7² = 7 × 7 = 49, no 45."),
  tf!("El resultado de 120 - 85 es igual a 45", false, "120 - 85 = 35, no 45."),
];

const MC_WORDS: &[McTemplate] = &[
  mc!("María tiene 45 caramelos y le regalan 28 más. ¿Cuántos caramelos tiene ahora?",
    ["73 caramelos", "63 caramelos", "83 caramelos", "53 caramelos"], 0, "45 + 28 = 73 caramelos."),
  mc!("Juan tenía 92 estampillas y regaló 37. ¿Cuántas estampillas le quedan?",
    ["65 estampillas", "55 estampillas", "45 estampillas", "129 estampillas"], 1, "92 - 37 = 55 estampillas."),
  mc!("Un paquete tiene 8 galletas. Si compras 7 paquetes, ¿cuántas galletas tienes en total?",
    ["48 galletas", "64 galletas", "56 galletas", "15 galletas"], 2, "8 × 7 = 56 galletas."),
  mc!("Una caja tiene 12 lápices. ¿Cuántos lápices hay en 9 cajas?",
    ["98 lápices", "118 lápices", "21 lápices", "108 lápices"], 3, "12 × 9 = 108 lápices."),
  mc!("Si tienes 72 manzanas y las repartes entre 8 personas por igual, ¿cuántas manzanas recibe cada uno?",
    ["9 manzanas", "8 manzanas", "10 manzanas", "7 manzanas"], 0, "72 ÷ 8 = 9 manzanas para cada persona."),
  mc!("Una biblioteca tiene 156 libros para organizar en 12 estantes iguales. ¿Cuántos libros van en cada estante?",
    ["12 libros", "13 libros", "14 libros", "15 libros"], 1, "156 ÷ 12 = 13 libros por estante."),
  mc!("Si comes 3/8 de una pizza y tu hermano come 2/8, ¿cuánto comieron entre los dos?",
    ["5/16 de pizza", "1/2 de pizza", "5/8 de pizza", "6/8 de pizza"], 2, "3/8 + 2/8 = 5/8 de pizza."),
  mc!("¿Cuánto es 1/4 + 1/2?", ["2/6", "1/6", "2/4", "3/4"], 3, "1/4 + 1/2 = 1/4 + 2/4 = 3/4."),
  mc!("Una tienda ofrece 20% de descuento en un artículo de $80. ¿Cuánto cuesta con el descuento?",
    ["$64", "$60", "$72", "$68"], 0, "20% de $80 = $16 de descuento. $80 - $16 = $64."),
  mc!("Si el 25% de un número es 15, ¿cuál es el número?", ["45", "60", "75", "40"], 1, "Si 25% = 15, entonces 100% = 15 × 4 = 60."),
  mc!("Si 3x + 5 = 20, ¿cuál es el valor de x?", ["6", "4", "5", "7"], 2, "3x + 5 = 20 → 3x = 15 → x = 5."),
  mc!("Si el doble de un número más 8 es igual a 22, ¿cuál es el número?", ["8", "6", "9", "7"], 3, "2x + 8 = 22 → 2x = 14 → x = 7."),
  mc!("Un rectángulo tiene 8 cm de largo y 5 cm de ancho. ¿Cuál es su área?",
    ["40 cm²", "26 cm²", "35 cm²", "45 cm²"], 0, "Área = largo × ancho = 8 × 5 = 40 cm²."),
  mc!("¿Cuál es el perímetro de un cuadrado de 9 cm de lado?", ["81 cm", "36 cm", "27 cm", "18 cm"], 1, "Perímetro = 4 × lado = 4 × 9 = 36 cm."),
  mc!("¿Cuál es el resultado de 5²?", ["10", "52", "25", "125"], 2, "5² = 5 × 5 = 25."),
  mc!("¿Cuánto es 2⁴?", ["8", "24", "32", "16"], 3, "2⁴ = 2 × 2 × 2 × 2 = 16."),
];

const MS_WORDS: &[MsTemplate] = &[
  ms!("¿Cuáles de las siguientes operaciones dan como resultado 24?",
    ["6 × 4" => true, "30 - 5" => false, "48 ÷ 2" => true, "20 + 5" => false],
    "6 × 4 = 24 y 48 ÷ 2 = 24. Las otras dan 25."),
  ms!("¿Cuáles de las siguientes operaciones dan como resultado 36?",
    ["6 × 6" => true, "42 - 6" => true, "72 ÷ 3" => false, "30 + 6" => true],
    "6 × 6 = 36, 42 - 6 = 36 y 30 + 6 = 36. En cambio 72 ÷ 3 = 24."),
  ms!("¿Cuáles de las siguientes operaciones dan como resultado 15?",
    ["3 × 5" => true, "18 - 3" => true, "45 ÷ 3" => true, "8 + 6" => false],
    "3 × 5 = 15, 18 - 3 = 15, 45 ÷ 3 = 15. Solo 8 + 6 = 14."),
  ms!("¿Cuáles de los siguientes son números pares?",
    ["14" => true, "23" => false, "36" => true, "41" => false],
    "14 y 36 son pares (divisibles por 2). 23 y 41 son impares."),
  ms!("¿Cuáles de los siguientes son múltiplos de 5?",
    ["25" => true, "32" => false, "45" => true, "53" => false],
    "25 y 45 terminan en 0 o 5, son múltiplos de 5."),
  ms!("¿Cuáles de los siguientes son números primos?",
    ["7" => true, "9" => false, "11" => true, "15" => false],
    "7 y 11 son primos. 9 = 3×3 y 15 = 3×5 no lo son."),
  ms!("¿Cuáles fracciones son equivalentes a 1/2?",
    ["2/4" => true, "3/5" => false, "4/8" => true, "5/9" => false],
    "2/4 = 1/2 y 4/8 = 1/2 son equivalentes."),
  ms!("¿Cuáles fracciones son equivalentes a 2/3?",
    ["4/6" => true, "3/4" => false, "6/9" => true, "5/6" => false],
    "4/6 = 2/3 y 6/9 = 2/3 son equivalentes."),
  ms!("¿Cuáles de las siguientes figuras tienen 4 lados?",
    ["Cuadrado" => true, "Triángulo" => false, "Rectángulo" => true, "Círculo" => false],
    "El cuadrado y el rectángulo tienen 4 lados."),
  ms!("¿Cuáles de los siguientes ángulos son agudos (menores que 90°)?",
    ["30°" => true, "90°" => false, "45°" => true, "180°" => false],
    "30° y 45° son menores que 90°, por lo tanto son agudos."),
  ms!("¿En cuáles ecuaciones x = 4?",
    ["2x = 8" => true, "3x = 15" => false, "x + 5 = 9" => true, "x - 2 = 3" => false],
    "2×4 = 8 y 4+5 = 9. En las otras x = 5."),
  ms!("¿Cuáles expresiones son iguales a 20?",
    ["4 × 5" => true, "25 - 6" => false, "100 ÷ 5" => true, "12 + 8" => true],
    "4×5 = 20, 100÷5 = 20, 12+8 = 20. Solo 25-6 = 19."),
];

pub static BANDS: &[Band] = &[
  Band { min: 1, max: 1, tf: TF_L1, mc: MC_L1, ms: MS_L1 },
  Band { min: 2, max: 2, tf: TF_L2, mc: MC_L2, ms: MS_L2 },
  Band { min: 3, max: 3, tf: TF_L3, mc: MC_L3, ms: &[] },
  Band { min: 4, max: 5, tf: TF_L45, mc: MC_L45, ms: &[] },
  Band { min: 3, max: 5, tf: &[], mc: &[], ms: MS_L35 },
  Band { min: 3, max: 5, tf: TF_WORDS, mc: MC_WORDS, ms: MS_WORDS },
];

// English pools reuse the symbolic statements above; worded items are rewritten.
const MC_EN_L12: &[McTemplate] = &[
  mc!("What is 5 + 4?", ["7", "8", "9", "10"], 2),
  mc!("What is 8 - 3?", ["4", "5", "6", "7"], 1),
  mc!("If you have 6 apples and get 3 more, how many do you have?", ["7", "8", "9", "10"], 2),
  mc!("You have 10 pencils and give away 4. How many are left?", ["5", "6", "7", "8"], 1),
  mc!("What is 6 × 7?", ["35", "42", "48", "49"], 1),
  mc!("What is 45 + 28?", ["63", "73", "83", "53"], 1),
  mc!("What is 100 - 36?", ["54", "64", "74", "84"], 1),
  mc!("What is 8 × 9?", ["63", "72", "81", "64"], 1),
];

const MS_EN_L12: &[MsTemplate] = &[
  ms!("Select ALL the sums that equal 10:", ["5 + 5" => true, "7 + 3" => true, "6 + 3" => false, "8 + 2" => true]),
  ms!("Which subtractions equal 5?", ["10 - 5" => true, "8 - 3" => true, "9 - 3" => false, "7 - 2" => true]),
  ms!("Select the numbers greater than 5:", ["7" => true, "3" => false, "9" => true, "4" => false]),
  ms!("Which numbers are even?", ["24" => true, "37" => false, "58" => true, "46" => true]),
];

const TF_EN_L35: &[TfTemplate] = &[
  tf!("1/2 + 1/4 = 3/4", true),
  tf!("0.5 + 0.25 = 0.75", true),
  tf!("3/4 = 0.75", true),
  tf!("234 × 10 = 2340", true),
  tf!("If 3x = 27, then x = 9.", true),
  tf!("20% of 150 equals 30.", true),
  tf!("9 × 8 = 63", false, "9 × 8 = 72, not 63."),
  tf!("56 ÷ 7 = 9", false, "56 ÷ 7 = 8, not 9."),
  tf!("1/3 + 1/3 = 2/6", false, "1/3 + 1/3 = 2/3, not 2/6."),
  tf!("7² = 45", false, "7² = 7 × 7 = 49, not 45."),
];

const MC_EN_L35: &[McTemplate] = &[
  mc!("What is 1/2 + 1/4?", ["1/2", "2/4", "3/4", "1"], 2),
  mc!("What is 0.5 + 0.3?", ["0.7", "0.8", "0.9", "1.0"], 1),
  mc!("What is 25% of 200?", ["40", "50", "60", "75"], 1),
  mc!("If x + 15 = 42, then x =", ["17", "27", "37", "57"], 1),
  mc!("What is the area of an 8 cm by 5 cm rectangle?", ["40 cm²", "26 cm²", "35 cm²", "45 cm²"], 0, "Area = length × width = 8 × 5 = 40 cm²."),
  mc!("If 3x + 5 = 20, what is x?", ["6", "4", "5", "7"], 2, "3x + 5 = 20 → 3x = 15 → x = 5."),
  mc!("What is 2⁴?", ["8", "24", "32", "16"], 3, "2⁴ = 2 × 2 × 2 × 2 = 16."),
];

const MS_EN_L35: &[MsTemplate] = &[
  ms!("Select the fractions equivalent to 1/2:", ["2/4" => true, "3/6" => true, "2/3" => false, "4/8" => true]),
  ms!("Which numbers are divisible by 5?", ["25" => true, "32" => false, "40" => true, "55" => true]),
  ms!("Which of these operations equal 24?",
    ["6 × 4" => true, "30 - 5" => false, "48 ÷ 2" => true, "20 + 5" => false],
    "6 × 4 = 24 and 48 ÷ 2 = 24. The others equal 25."),
  ms!("Which of these are prime numbers?",
    ["7" => true, "9" => false, "11" => true, "15" => false],
    "7 and 11 are prime. 9 = 3×3 and 15 = 3×5 are not."),
];

pub static BANDS_EN: &[Band] = &[
  Band { min: 1, max: 1, tf: TF_L1, mc: MC_EN_L12, ms: MS_EN_L12 },
  Band { min: 2, max: 2, tf: TF_L2, mc: MC_EN_L12, ms: MS_EN_L12 },
  Band { min: 3, max: 5, tf: TF_EN_L35, mc: MC_EN_L35, ms: MS_EN_L35 },
];
