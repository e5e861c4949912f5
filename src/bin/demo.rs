use squaremat::error::SquareMatError;
use squaremat::matrix::square::SquareMat;

// Walks through every operation of the matrix type and prints the results,
// in the same order as the scenarios the tests cover.
fn run() -> Result<(), SquareMatError> {
    let mat1 = SquareMat::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])?;
    println!("Matrix 1:\n{}", mat1);

    let mat2 = SquareMat::from_rows(vec![
        vec![9.0, 8.0, 7.0],
        vec![6.0, 5.0, 4.0],
        vec![3.0, 2.0, 1.0],
    ])?;
    println!("Matrix 2:\n{}", mat2);

    println!("Sum of matrices:\n{}", (&mat1 + &mat2)?);
    println!("Difference of matrices:\n{}", (&mat1 - &mat2)?);
    println!("Product of matrices:\n{}", (&mat1 * &mat2)?);

    println!("Scalar product of matrices:\n{}", &mat1 * 2.0);
    println!("Left scalar product:\n{}", 3.0 * &mat1);

    println!("Transpose of matrix 1:\n{}", mat1.transpose());
    println!("Determinant of matrix 1: {}", mat1.determinant());
    println!("Negation of matrix 1:\n{}", -&mat1);

    println!("Comparison of matrices by sum of elements:");
    let yes_no = |b| if b { "Yes" } else { "No" };
    println!("Are matrix 1 and matrix 2 equal? {}", yes_no(mat1 == mat2));
    println!("Is matrix 1 greater than matrix 2? {}", yes_no(mat1 > mat2));
    println!("Is matrix 1 less than matrix 2? {}", yes_no(mat1 < mat2));
    println!(
        "Is matrix 1 greater than or equal to matrix 2? {}",
        yes_no(mat1 >= mat2)
    );
    println!(
        "Is matrix 1 less than or equal to matrix 2? {}",
        yes_no(mat1 <= mat2)
    );
    println!(
        "Are matrix 1 and matrix 2 not equal? {}",
        yes_no(mat1 != mat2)
    );

    println!("Matrix 1 to the power of 0:\n{}", mat1.pow(0)?);
    println!("Matrix 1 to the power of 1:\n{}", mat1.pow(1)?);
    println!("Matrix 1 to the power of 2:\n{}", mat1.pow(2)?);

    println!("Division by scalar:\n{}", (&mat1 / 2.0)?);
    println!("Element-wise multiplication:\n{}", (&mat1 % &mat2)?);
    println!("Modulo with scalar (4):\n{}", (&mat1 % 4)?);

    println!("Testing compound operators:");
    let mut compound = SquareMat::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    let other = SquareMat::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]])?;
    println!("Original matrix:\n{}", compound);

    compound.add_assign(&other)?;
    println!("After +=:\n{}", compound);

    compound.sub_assign(&other)?;
    println!("After -=:\n{}", compound);

    compound.mul_assign(&other)?;
    println!("After *= (matrix):\n{}", compound);

    compound.scale_assign(2.0)?;
    println!("After *= (scalar):\n{}", compound);

    compound.div_assign(2.0)?;
    println!("After /=:\n{}", compound);

    compound.elem_mul_assign(&other)?;
    println!("After %= (matrix):\n{}", compound);

    compound.rem_assign(3)?;
    println!("After %= (scalar):\n{}", compound);

    let mut mat1 = mat1;
    println!("Incrementing all elements of matrix 1:\n{}", mat1.increment());
    println!("Decrementing all elements of matrix 1:\n{}", mat1.decrement());

    println!("Postfix increment:");
    let before = mat1.post_increment();
    println!("Original value returned:\n{}", before);
    println!("New value of matrix:\n{}", mat1);

    println!("Postfix decrement:");
    let before = mat1.post_decrement();
    println!("Original value returned:\n{}", before);
    println!("New value of matrix:\n{}", mat1);

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(error) = run() {
        match &error {
            SquareMatError::InvalidArgument(_) => log::error!("bad operation input: {}", error),
            SquareMatError::IndexOutOfRange(_) => log::error!("bad index: {}", error),
        }
        std::process::exit(1);
    }
}
